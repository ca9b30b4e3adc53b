use std::path::PathBuf;

use crate::errors::ResolveError;

pub const ENV_MAX_INDEX_COUNT: &str = "ESQUERY_MAX_INDEX_COUNT";
pub const ENV_LOG_LEVEL: &str = "ESQUERY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ESQUERY_LOG_DIR";

/// Upper bound on indexes returned for one query. Older indexes beyond it are dropped.
pub const DEFAULT_MAX_INDEX_COUNT: usize = 256;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub max_index_count: usize,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `esquery_core=debug`.
    pub level: String,
    /// Write daily rolling log files here in addition to stdout.
    pub dir: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_index_count: DEFAULT_MAX_INDEX_COUNT,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}

impl ResolverConfig {
    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ResolveError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ResolveError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let max_index_count = match read(ENV_MAX_INDEX_COUNT) {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                ResolveError::Config(format!("{ENV_MAX_INDEX_COUNT}={raw:?}: {e}"))
            })?,
            None => DEFAULT_MAX_INDEX_COUNT,
        };

        if max_index_count == 0 {
            return Err(ResolveError::Config(format!(
                "{ENV_MAX_INDEX_COUNT} must be at least 1"
            )));
        }

        Ok(Self {
            max_index_count,
            log: LogConfig {
                level: read(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                dir: read(ENV_LOG_DIR).map(PathBuf::from),
            },
        })
    }
}
