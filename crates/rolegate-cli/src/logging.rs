//! Diagnostic logging setup.
//!
//! stdout carries the hook decision, so logs go to stderr or to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Installs the global subscriber.
///
/// `filter` uses `EnvFilter` syntax; an invalid value falls back to `warn`.
/// When `log_file` is given, output is appended to it instead of stderr and
/// the returned guard must be held until exit to flush buffered lines.
pub fn init(filter: &str, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard) = match log_file.and_then(file_writer) {
        Some((writer, guard)) => (writer, Some(guard)),
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    guard
}

/// Opens `path` for appending. `None` if it cannot be used, in which case
/// the caller logs to stderr.
fn file_writer(path: &Path) -> Option<(BoxMakeWriter, WorkerGuard)> {
    let file_name = path.file_name()?.to_string_lossy().into_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if std::fs::create_dir_all(dir).is_err() {
        return None;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("rolegate: cannot log to {}: {}", path.display(), e);
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    Some((BoxMakeWriter::new(non_blocking), guard))
}
