use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "recado";

/// Default log level for the current build mode.
fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Starts an appending file logger under `log_dir`. The caller keeps the
/// handle alive for the lifetime of the process; a failed start is reported
/// by the caller and the session runs without diagnostics.
pub fn init(log_dir: &Path) -> Result<LoggerHandle, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|err| format!("cannot create log directory {}: {}", log_dir.display(), err))?;

    Logger::try_with_env_or_str(default_level())
        .map_err(|err| format!("invalid log level: {}", err))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {}", err))
}
