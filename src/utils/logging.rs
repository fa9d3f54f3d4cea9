//! Logger setup. The terminal belongs to the UI, so log lines go to
//! ~/.flappy/flappy.log instead of stderr.

use super::persistence::log_path;
use std::fs::OpenOptions;
use std::io;

/// Route the `log` facade to the log file. Level defaults to `info` and can
/// be overridden with `RUST_LOG`.
pub fn init_logging() -> io::Result<()> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
