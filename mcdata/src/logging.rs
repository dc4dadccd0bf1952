use log::LevelFilter;
use mcdata_config::logging::{self, LoggingConfig};

/// Installs the `simple_logger` backend as configured. Does nothing when
/// logging is disabled.
pub fn init_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut logger = simple_logger::SimpleLogger::new();
    logger = logger.with_timestamp_format(time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    if !config.timestamp {
        logger = logger.without_timestamps();
    }

    if config.env {
        logger = logger.env();
    }

    logger = logger.with_level(convert_logger_filter(config.level));

    logger = logger.with_colors(config.color);
    logger = logger.with_threads(config.threads);
    logger.init()
}

const fn convert_logger_filter(level: logging::LevelFilter) -> LevelFilter {
    match level {
        logging::LevelFilter::Off => LevelFilter::Off,
        logging::LevelFilter::Error => LevelFilter::Error,
        logging::LevelFilter::Warn => LevelFilter::Warn,
        logging::LevelFilter::Info => LevelFilter::Info,
        logging::LevelFilter::Debug => LevelFilter::Debug,
        logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod test {
    use log::LevelFilter;
    use mcdata_config::logging::{self, LoggingConfig};

    use super::{convert_logger_filter, init_logger};

    #[test]
    fn level_mapping() {
        assert_eq!(convert_logger_filter(logging::LevelFilter::Off), LevelFilter::Off);
        assert_eq!(convert_logger_filter(logging::LevelFilter::Debug), LevelFilter::Debug);
        assert_eq!(convert_logger_filter(logging::LevelFilter::Trace), LevelFilter::Trace);
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(init_logger(&config).is_ok());
    }
}
