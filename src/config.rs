use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::argument::Argument;
use crate::codec::{Charset, UnsupportedCharsetError, DEFAULT_CHARSET};
use crate::utils::LogLevel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnsupportedCharset(#[from] UnsupportedCharsetError),
}

/// Defaults applied when building arguments.
///
/// ```json
/// { "default_charset": "Shift_JIS", "always_encoded": true, "log_level": "debug" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_charset: String,
    pub always_encoded: bool,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_charset: DEFAULT_CHARSET.to_string(),
            always_encoded: true,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;
        // Fail at load time rather than on the first argument.
        config.charset()?;
        Ok(config)
    }

    pub fn charset(&self) -> Result<Charset, UnsupportedCharsetError> {
        Charset::for_label(&self.default_charset)
    }

    /// Raw argument carrying the configured charset and policy.
    pub fn argument(&self, name: &str, value: &str) -> Result<Argument, UnsupportedCharsetError> {
        let mut argument = Argument::with_charset(name, value, self.charset()?);
        argument.set_always_encoded(self.always_encoded);
        Ok(argument)
    }
}
