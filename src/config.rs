use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::control::{
    StarSize, StarStyle, DEFAULT_STAR_COUNT, DEFAULT_STAR_SIZE, MAX_STAR_CELLS, MAX_STAR_COUNT,
    POINTS_PER_CELL,
};
use crate::error::{Result, TrackerError};

/// Largest accepted star width or height, in points.
pub const MAX_STAR_DIMENSION: f64 = POINTS_PER_CELL * MAX_STAR_CELLS as f64;

/// Reject star counts above [`MAX_STAR_COUNT`].
pub fn check_star_count(star_count: usize) -> Result<()> {
    if star_count > MAX_STAR_COUNT {
        return Err(TrackerError::InvalidInput(format!(
            "star count must be at most {}, got {}",
            MAX_STAR_COUNT, star_count
        )));
    }
    Ok(())
}

/// Settings for the rating control, read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub star_count: usize,
    pub star_width: f64,
    pub star_height: f64,
    pub filled_glyph: String,
    pub empty_glyph: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let style = StarStyle::default();
        Self {
            star_count: DEFAULT_STAR_COUNT,
            star_width: DEFAULT_STAR_SIZE.width,
            star_height: DEFAULT_STAR_SIZE.height,
            filled_glyph: style.filled,
            empty_glyph: style.empty,
        }
    }
}

impl TrackerConfig {
    pub fn star_size(&self) -> StarSize {
        StarSize::new(self.star_width, self.star_height)
    }

    pub fn star_style(&self) -> StarStyle {
        StarStyle::new(self.filled_glyph.clone(), self.empty_glyph.clone())
    }

    /// Check values serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_star_count(self.star_count)?;

        for (field, value) in [
            ("star_width", self.star_width),
            ("star_height", self.star_height),
        ] {
            if !value.is_finite() || !(0.0..=MAX_STAR_DIMENSION).contains(&value) {
                return Err(TrackerError::InvalidInput(format!(
                    "{} must be between 0 and {}, got {}",
                    field, MAX_STAR_DIMENSION, value
                )));
            }
        }

        if self.filled_glyph.is_empty() || self.empty_glyph.is_empty() {
            return Err(TrackerError::InvalidInput(
                "Star glyphs must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load configuration from a JSON file.
///
/// A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrackerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(TrackerConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: TrackerConfig = serde_json::from_str(&content)?;
    config.validate()?;

    debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}
