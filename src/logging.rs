//! Diagnostic logging.
//!
//! The TUI owns the terminal, so logs never go to stdout. Logging is off by
//! default; set `VITALAB_LOG` to a file path to enable it, and `RUST_LOG`
//! to filter (defaults to `info`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_PATH_ENV: &str = "VITALAB_LOG";

pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_PATH_ENV) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("warning: failed to create log file: {unique_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Suffix the configured path with timestamp and pid so concurrent runs do
/// not clobber each other's logs.
fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{timestamp}.{pid}")
}

#[cfg(test)]
mod tests {
    use super::unique_log_path;

    #[test]
    fn unique_log_path_appends_timestamp_and_pid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("vitalab.log");
        let base_str = base.to_string_lossy();

        let path = unique_log_path(&base_str);
        assert!(path.starts_with(&*base_str));

        let suffix = path[base_str.len()..].trim_start_matches('.');
        let parts: Vec<&str> = suffix.split('.').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())));

        // The suffixed path is still creatable where the base points.
        assert!(std::fs::File::create(&path).is_ok());
    }
}
