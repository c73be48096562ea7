//! File-based logging bootstrap.
//!
//! Rolling logs under `<data_dir>/logs`, level taken from `RUST_LOG`
//! (default `info`). Core modules only emit `log` macros; the CLI decides
//! whether to initialize a backend, and a failed init must never take the
//! process down with it.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use std::path::Path;

pub use flexi_logger::LoggerHandle;

const LOG_FILE_BASENAME: &str = "habitloom";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Start rolling file logs in `log_dir`.
///
/// The returned handle flushes on drop; hold it for the life of the process.
///
/// # Errors
/// Returns an error if the directory cannot be created or the logger
/// backend fails to start.
pub fn init(log_dir: &Path) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .start()?;
    Ok(handle)
}
