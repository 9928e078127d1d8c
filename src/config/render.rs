//! Tree rendering configuration.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Symbol set used to draw branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Box-drawing characters
    #[default]
    Unicode,

    /// Plain ASCII for terminals without box-drawing glyphs
    Ascii,
}

/// Tree renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Branch symbol set
    pub style: RenderStyle,

    /// Whether terminal nodes show their payload instead of a marker
    pub show_payloads: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Unicode,
            show_payloads: true,
        }
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
