//! `tracing` subscriber setup for the binaries.
//!
//! The filter comes from `FLATRIS_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FLATRIS_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Nothing is installed; events are discarded.
    Off,
    Stderr,
    /// Appended to a file, without ANSI colours.
    File(PathBuf),
}

impl LogTarget {
    /// `File` when a path is configured, `fallback` otherwise.
    pub fn from_path(path: Option<PathBuf>, fallback: LogTarget) -> Self {
        path.map_or(fallback, LogTarget::File)
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e)),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_overrides_fallback() {
        assert_eq!(
            LogTarget::from_path(Some("a.log".into()), LogTarget::Off),
            LogTarget::File("a.log".into())
        );
        assert_eq!(LogTarget::from_path(None, LogTarget::Stderr), LogTarget::Stderr);
    }

    #[test]
    fn off_installs_nothing() {
        assert!(init(LogTarget::Off).is_ok());
    }
}
