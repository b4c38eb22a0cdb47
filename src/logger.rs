//! File logging with daily rotation in local time.
//!
//! Logs go to `<log_path>/repo-persona.YYYY-MM-DD`; stdout stays reserved for
//! JSON output. Only active with `--debug` or `debug = true`.

use anyhow::Result;
use logroller::{LogRollerBuilder, Rotation, RotationAge, TimeZone};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// File name prefix of every log file this tool writes.
const LOG_PREFIX: &str = "repo-persona";

/// Log files older than this many days are removed on start.
const RETENTION_DAYS: u64 = 3;

/// Install the file subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_path)?;
    let removed = cleanup_old_logs(&config.log_path)?;

    let appender = LogRollerBuilder::new(config.log_path.as_path(), Path::new(LOG_PREFIX))
        .rotation(Rotation::AgeBased(RotationAge::Daily))
        .time_zone(TimeZone::Local)
        .max_keep_files(3)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create log roller: {}", e))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(
        local_offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );

    let subscriber = tracing_subscriber::registry().with(filter(config)).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(timer),
    );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_path = %config.log_path.display(),
        removed_logs = removed,
        "logging initialized"
    );
    Ok(guard)
}

/// `RUST_LOG` wins; otherwise the configured level applies to everything.
fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Remove this tool's log files older than the retention window.
/// Returns how many were removed.
pub fn cleanup_old_logs(log_path: &Path) -> Result<usize> {
    if !log_path.exists() {
        return Ok(0);
    }
    let cutoff = SystemTime::now() - Duration::from_secs(RETENTION_DAYS * 24 * 60 * 60);

    let mut removed = 0;
    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();
        let ours = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_PREFIX));
        if !ours {
            continue;
        }

        let expired = entry
            .metadata()
            .and_then(|m| m.modified())
            .is_ok_and(|modified| modified < cutoff);
        if expired && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_file(path: &Path, days: u64) {
        let when = SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60);
        let secs = when.duration_since(SystemTime::UNIX_EPOCH).unwrap().as_secs();
        let ts = libc::timespec {
            tv_sec: secs as libc::time_t,
            tv_nsec: 0,
        };
        let times = [ts, ts];
        let c_path = std::ffi::CString::new(path.to_str().unwrap()).unwrap();
        let ret = unsafe { libc::utimensat(libc::AT_FDCWD, c_path.as_ptr(), times.as_ptr(), 0) };
        assert_eq!(ret, 0, "{}", std::io::Error::last_os_error());
    }

    #[test]
    fn expired_logs_are_removed_recent_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let old = dir.path().join("repo-persona.2020-01-01");
        let recent = dir.path().join("repo-persona.2026-10-17");
        fs::write(&old, "old").unwrap();
        fs::write(&recent, "recent").unwrap();
        age_file(&old, RETENTION_DAYS + 1);

        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 1);
        assert!(!old.exists());
        assert!(recent.exists());
    }

    #[test]
    fn foreign_files_and_dirs_are_left_alone() {
        let dir = tempfile::TempDir::new().unwrap();
        let foreign = dir.path().join("other-app.log");
        fs::write(&foreign, "other").unwrap();
        age_file(&foreign, 30);
        let subdir = dir.path().join("repo-persona.subdir");
        fs::create_dir(&subdir).unwrap();

        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
        assert!(foreign.exists());
        assert!(subdir.exists());
    }

    #[test]
    fn missing_or_empty_dir_is_fine() {
        assert_eq!(
            cleanup_old_logs(Path::new("/tmp/nonexistent_repo_persona_log_dir")).unwrap(),
            0
        );
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}
