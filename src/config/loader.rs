//! Word source configuration.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How a word source is split into keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Any run of whitespace separates words
    #[default]
    Whitespace,

    /// Each non-empty line, trimmed, is one key
    Line,
}

/// Word loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoaderConfig {
    /// How the source text is split into keys
    pub delimiter: Delimiter,

    /// Stop after this many words (None for no limit)
    pub max_words: Option<usize>,
}

impl Validate for LoaderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_words == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "loader.max_words".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
