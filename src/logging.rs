// File: ./src/logging.rs
// Logger setup for the binary. The library only uses the `log` macros.
use crate::config::Config;
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;

/// Stderr at the configured level, plus `echo.log` in the data directory
/// unless `log_to_file` is off. The file always records at least `Info`.
pub fn init(config: &Config, ctx: &dyn AppContext) -> Result<()> {
    let level = config.level_filter();
    let log_config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if config.log_to_file {
        let path = ctx.get_log_file_path()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        loggers.push(WriteLogger::new(level.max(LevelFilter::Info), log_config, file));
    }

    CombinedLogger::init(loggers).context("Logger already initialized")?;
    Ok(())
}
