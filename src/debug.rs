//! Log bridge for motiontext.
//!
//! Routes every `log::info!()` etc. from the member crates to stderr as
//! timestamped lines. The level comes from, in order of precedence:
//! - the `--log-level` CLI flag
//! - the `MOTIONTEXT_LOG` environment variable (a bare level name)
//! - `log_level` in the config file

use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use motiontext_config::LogLevel;
use parking_lot::Mutex;

/// Environment variable overriding the configured log level.
pub const LOG_ENV_VAR: &str = "MOTIONTEXT_LOG";

struct LogBridge {
    level: log::LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let mut sink = self.sink.lock();
        // Logging must never take the process down
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the effective log level.
///
/// An unparseable environment value is ignored rather than treated as `off`.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    env_value: Option<&str>,
    config_level: LogLevel,
) -> LogLevel {
    cli_level
        .or_else(|| env_value.and_then(LogLevel::from_name))
        .unwrap_or(config_level)
}

/// Install the log bridge. Later calls keep the first level.
pub fn init_log_bridge(cli_level: Option<LogLevel>, config_level: LogLevel) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env_value.as_deref(), config_level);

    let logger = LOGGER.get_or_init(|| LogBridge {
        level: level.to_level_filter(),
        sink: Mutex::new(Box::new(std::io::stderr())),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Trace), Some("error"), LogLevel::Info),
            LogLevel::Trace
        );
    }

    #[test]
    fn test_env_level_beats_config() {
        assert_eq!(
            resolve_level(None, Some("debug"), LogLevel::Warn),
            LogLevel::Debug
        );
    }

    #[test]
    fn test_bad_env_level_falls_back_to_config() {
        assert_eq!(
            resolve_level(None, Some("loud"), LogLevel::Info),
            LogLevel::Info
        );
        assert_eq!(resolve_level(None, None, LogLevel::Off), LogLevel::Off);
    }
}
