// Command-line options for fix-encoding
// The target path and patterns are fixed; only output behavior can be tuned.

use clap::{ArgAction, Parser};
use std::path::Path;

use crate::patch::TARGET_PATH;

#[derive(Debug, Parser)]
#[command(
    name = "fix-encoding",
    version,
    about = "Fix encoding issues in Main.java by escaping em-dash literals"
)]
pub struct Options {
    /// Show the changes as a unified diff without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// File to patch, relative to the current working directory
    pub fn target(&self) -> &'static Path {
        Path::new(TARGET_PATH)
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let options = Options::parse_from(["fix-encoding"]);
        assert!(!options.dry_run);
        assert_eq!(options.verbose, 0);
        assert_eq!(options.log_directive(), "warn");
        assert_eq!(options.target(), Path::new("src/main/java/converter/Main.java"));
    }

    #[test]
    fn test_dry_run_and_verbosity() {
        let options = Options::parse_from(["fix-encoding", "--dry-run", "-vv"]);
        assert!(options.dry_run);
        assert_eq!(options.log_directive(), "debug");

        let options = Options::parse_from(["fix-encoding", "-vvvv"]);
        assert_eq!(options.log_directive(), "trace");
    }

    #[test]
    fn test_rejects_path_argument() {
        let result = Options::try_parse_from(["fix-encoding", "Other.java"]);
        assert!(result.is_err());
    }
}
