use clap::Parser;
use ipspan::cli::Cli;
use ipspan::output;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with JSON/CSV on stdout
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref(), cli.verbose))
        .try_init()?;

    match cli.run() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            output::print_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// `RUST_LOG` when set and valid, else `warn`. `--verbose` raises it to `debug`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose { Level::DEBUG } else { Level::WARN };
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) if verbose => filter.add_directive(Level::DEBUG.into()),
        Some(Ok(filter)) => filter,
        _ => EnvFilter::new(default.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_level() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_is_not_overridden() {
        assert_eq!(
            log_filter(Some("trace"), false).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(
            log_filter(Some("info"), false).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        assert_eq!(
            log_filter(Some("ipspan=notalevel"), false).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
