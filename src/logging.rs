//! Logger setup
//!
//! `RUST_LOG` is honoured; without it only warnings are shown.
//! `--verbose` forces the global level to debug.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Build the logger for one invocation
pub fn builder(verbose: bool) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder
}

/// Install the logger as the global `log` backend
pub fn init(verbose: bool) {
    builder(verbose).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn debug_enabled(logger: &env_logger::Logger) -> bool {
        let metadata = Metadata::builder()
            .level(Level::Debug)
            .target("atlasctl::commands::measurements")
            .build();
        logger.enabled(&metadata)
    }

    #[test]
    fn test_verbose_enables_debug() {
        let logger = builder(true).build();
        assert!(logger.filter() >= LevelFilter::Debug);
        assert!(debug_enabled(&logger));
    }

    #[test]
    fn test_quiet_by_default() {
        // An explicit RUST_LOG takes precedence over the default
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = builder(false).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
        assert!(!debug_enabled(&logger));
    }
}
