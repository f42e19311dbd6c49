use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Logs always go to stderr so stdout carries only the tool's own output.
/// `RUST_LOG` takes precedence over `default_directive`, and `NO_COLOR`
/// disables ANSI codes. Returns `false` if a subscriber was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let ansi = std::env::var_os("NO_COLOR").is_none();

    fmt::Subscriber::builder()
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_logging("debug");
        assert!(!init_logging("trace"));
    }
}
