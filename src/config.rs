/// Default upper bound on a single input record (10 MiB).
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 10 * 1024 * 1024;

const MAX_MESSAGE_BYTES_VAR: &str = "TWO_SUM_MCP_MAX_MESSAGE_BYTES";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidMessageBound { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `TWO_SUM_MCP_MAX_MESSAGE_BYTES` (optional, default 10 MiB): largest
    ///   accepted input record, newline excluded
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_message_bytes = match lookup(MAX_MESSAGE_BYTES_VAR) {
            Some(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidMessageBound {
                        var: MAX_MESSAGE_BYTES_VAR,
                        value: val,
                    })
                }
            },
            None => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self { max_message_bytes })
    }
}
