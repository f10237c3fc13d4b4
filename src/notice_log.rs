use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const NOTICE_LOG_FILE: &str = "notices.log";

/// Append one user-visible notice, prefixed with a local timestamp.
pub fn append_notice(path: impl AsRef<Path>, msg: &str) {
    match OpenOptions::new().create(true).append(true).open(path.as_ref()) {
        Ok(mut file) => {
            let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
        }
        Err(e) => {
            tracing::debug!(path = %path.as_ref().display(), error = %e, "notice log unavailable");
        }
    }
}
