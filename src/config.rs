// SPDX-License-Identifier: GPL-3.0-only

//! Presenter and pipeline configuration
//!
//! Loaded from a JSON file when present, otherwise defaults apply. Every
//! field has a sensible default, so a partially-written config never breaks
//! startup: an unreadable file logs a warning and falls back wholesale.

use crate::constants::{
    FALLBACK_COLOR, FALLBACK_HEIGHT, FALLBACK_WIDTH, TEXTURE_HEIGHT, TEXTURE_WIDTH,
};
use crate::session::{Orientation, RenderMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Texture sampling filter for the presenter
///
/// Nearest avoids interpolation artifacts on binary edge maps; linear smooths
/// the rescaled image. Both are valid policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplerFiltering {
    #[default]
    Nearest,
    Linear,
}

impl SamplerFiltering {
    /// Get display name for the filtering mode
    pub fn display_name(&self) -> &'static str {
        match self {
            SamplerFiltering::Nearest => "Nearest",
            SamplerFiltering::Linear => "Linear",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed width of the GPU frame texture
    pub texture_width: u32,
    /// Fixed height of the GPU frame texture
    pub texture_height: u32,
    /// Texture sampling filter
    pub filtering: SamplerFiltering,
    /// Width of the placeholder frame served for empty store slots
    pub fallback_width: u32,
    /// Height of the placeholder frame
    pub fallback_height: u32,
    /// RGB fill color of the placeholder frame
    pub fallback_color: [u8; 3],
    /// Render mode a new session starts in
    pub default_mode: RenderMode,
    /// Orientation a new session starts in
    pub default_orientation: Orientation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            texture_width: TEXTURE_WIDTH,
            texture_height: TEXTURE_HEIGHT,
            filtering: SamplerFiltering::default(),
            fallback_width: FALLBACK_WIDTH,
            fallback_height: FALLBACK_HEIGHT,
            fallback_color: FALLBACK_COLOR,
            default_mode: RenderMode::default(),
            default_orientation: Orientation::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults
    ///
    /// A missing file is normal on first run; an unparsable file logs a
    /// warning and is ignored.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "invalid config file, using defaults"
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Default config location under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("edgecam").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.texture_width, TEXTURE_WIDTH);
        assert_eq!(config.texture_height, TEXTURE_HEIGHT);
        assert_eq!(config.filtering, SamplerFiltering::Nearest);
        assert_eq!(config.fallback_color, FALLBACK_COLOR);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/edgecam/config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = Config::default();
        config.filtering = SamplerFiltering::Linear;
        config.default_mode = RenderMode::RawCamera;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
