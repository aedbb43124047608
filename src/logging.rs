//! File logging.
//!
//! The terminal belongs to the game, so log records go to a file. A panic
//! hook records where a panic happened before the process unwinds or aborts.

use std::ops::Deref;
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_FILE: &str = "grid-arcade.log";

/// Log file used when none is configured.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

pub fn level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the panic hook and a file logger writing to `path`.
pub fn setup(path: &Path, debug: bool) -> Result<()> {
    panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::capture();
        log::error!("{backtrace}");

        let (filename, line) = panic_info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));

        let cause = panic_info
            .payload()
            .downcast_ref::<String>()
            .map(String::deref)
            .unwrap_or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<&str>()
                    .copied()
                    .unwrap_or("<cause unknown>")
            });

        log::error!("A panic occurred at {}:{}: {}", filename, line, cause);
    }));

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{l} {d(%H:%M:%S.%3f)} {f}:{L} {m}{n}",
        )))
        .build(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file-appender", Box::new(file_appender)))
        .build(Root::builder().appender("file-appender").build(level(debug)))
        .context("invalid log configuration")?;

    log4rs::init_config(config).context("logger already initialized")?;
    Ok(())
}
