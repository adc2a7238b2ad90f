//! Logging Infrastructure
//!
//! Console output by default, daily rolling files when a log directory is set.

use std::path::Path;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON format and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level
        .unwrap_or("info")
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(log_path) {
            eprintln!("Cannot create log directory {dir}: {e}");
            return None;
        }
        Some(tracing_appender::rolling::daily(log_path, "timesheet-server"))
    });

    match (file_appender, json.unwrap_or(false)) {
        (Some(appender), true) => subscriber.json().with_writer(appender).init(),
        (Some(appender), false) => subscriber.with_ansi(false).with_writer(appender).init(),
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}
