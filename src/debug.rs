// Debug logging for Fixpong
// The terminal belongs to the game, so log lines go to a file, and only with --debug

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Where `--debug` sessions write their log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("fixpong-debug.log")
}

/// Install the tracing subscriber
///
/// # Behavior
/// - If enabled=false: Returns immediately, every tracing macro is a no-op
/// - If enabled=true: Truncates the log file and routes all events at DEBUG and above to it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!("Fixpong debug log, monitor with: tail -f {}", path.display());
    Ok(())
}
