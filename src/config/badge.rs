use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::layout::config::BadgeLayout;

/// Everything about a badge's look that is not the data it shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Color palette.
    pub theme: Theme,
    /// Geometry and font sizes.
    pub layout: BadgeLayout,
}

impl BadgeConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> BadgeResult<Self> {
        let cfg: BadgeConfig = serde_json::from_reader(r)
            .map_err(|e| BadgeError::serde(format!("parse badge config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BadgeError::validation(format!("open badge config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the layout against the fixed badge canvas.
    pub fn validate(&self) -> BadgeResult<()> {
        self.layout.validate(CanvasSize::BADGE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/badge.rs"]
mod tests;
