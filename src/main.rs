use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use fix_encoding::{
    config::Options,
    logging,
    patch::{self, CONFIRMATION},
};

fn main() -> Result<()> {
    let options = Options::parse();

    // Logs go to stderr; stdout is reserved for the confirmation or the diff
    logging::init_logging(options.log_directive());

    info!(
        "Starting fix-encoding v{} on {}",
        fix_encoding::version(),
        std::env::consts::OS
    );

    let target = options.target();
    debug!("Target file: {}", target.display());

    if options.dry_run {
        let (report, diff) = patch::preview(target)
            .with_context(|| format!("Failed to preview {}", target.display()))?;

        print!("{}", diff);
        println!(
            "Would replace {} em-dash literal(s) in {}",
            report.total(),
            target.display()
        );
        return Ok(());
    }

    let report = patch::patch(target)
        .with_context(|| format!("Failed to fix encoding in {}", target.display()))?;
    debug!("Wrote {} with {} replacement(s)", report.path.display(), report.total());

    println!("{}", CONFIRMATION);

    Ok(())
}
