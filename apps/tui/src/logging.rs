//! File logging. stdout and stderr belong to the terminal UI, so records go
//! to rotating files under `LOG_DIR`, and only when debug is enabled.

use crate::config::AppConfig;
use color_eyre::Result;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "grand-strategy";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Keep the returned handle alive for the whole run; dropping it flushes.
pub fn init_logging(config: &AppConfig) -> Result<Option<LoggerHandle>> {
    if !config.debug {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)?;

    let handle = Logger::try_with_str("debug")?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!(
        "event=app_start version={} variant={} theme_file={}",
        env!("CARGO_PKG_VERSION"),
        config.variant.as_str(),
        config.theme_file.display()
    );

    Ok(Some(handle))
}
