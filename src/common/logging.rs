use anyhow::Result;
use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;
use time::macros::format_description;

/// Parse a log level name (case-insensitive); `None` if unrecognized
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::Trace),
        "DEBUG" => Some(LevelFilter::Debug),
        "INFO" => Some(LevelFilter::Info),
        "WARN" | "WARNING" => Some(LevelFilter::Warn),
        "ERROR" => Some(LevelFilter::Error),
        "OFF" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// Install the process-wide logger. Unknown levels fall back to INFO.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let parsed = parse_log_level(log_level);
    SimpleLogger::new()
        .with_level(parsed.unwrap_or(LevelFilter::Info))
        .with_timestamp_format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .init()?;

    if parsed.is_none() {
        warn!("Invalid log level '{}', defaulting to INFO.", log_level);
    }
    Ok(())
}
