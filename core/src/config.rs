use crate::geometry::DesignSize;

pub const DESIGN_WIDTH: f64 = 1600.0;
pub const DESIGN_HEIGHT: f64 = 900.0;
pub const MARGIN_FACTOR: f64 = 0.95;
pub const ANCHOR_TOP_PX: f64 = 250.0;
pub const ZOOM_POLL_INTERVAL_MS: u32 = 500;
pub const ORIENTATION_SETTLE_MS: u32 = 200;
pub const CLIP_GAP_PX: f64 = 20.0;

pub const PRIMARY_SELECTOR: &str = ".main-wrapper";
pub const ANCHOR_SELECTOR: &str = ".container";
pub const VIDEO_MODAL_SELECTOR: &str = ".video-modal-content";
pub const CLIP_SELECTOR: &str = ".hologram-video";
pub const TRIGGER_SELECTOR: &str = ".sector-btn";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("design size must be positive, got {width}x{height}")]
    InvalidDesignSize { width: f64, height: f64 },
    #[error("margin factor must be in (0, 1], got {0}")]
    InvalidMarginFactor(f64),
    #[error("zoom poll interval must be non-zero")]
    ZeroPollInterval,
}

/// Structural selectors for every element the synchronizer touches.
#[derive(Clone, Debug, PartialEq)]
pub struct StageSelectors {
    pub primary: String,
    pub anchor: String,
    /// Overlays that follow the stage scale. The budget modal is styled
    /// independently and stays out of this list.
    pub overlays: Vec<String>,
    pub clips: String,
    pub triggers: String,
}

impl Default for StageSelectors {
    fn default() -> Self {
        Self {
            primary: PRIMARY_SELECTOR.to_string(),
            anchor: ANCHOR_SELECTOR.to_string(),
            overlays: vec![VIDEO_MODAL_SELECTOR.to_string()],
            clips: CLIP_SELECTOR.to_string(),
            triggers: TRIGGER_SELECTOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageConfig {
    pub design: DesignSize,
    pub margin_factor: f64,
    pub anchor_top_px: f64,
    pub zoom_poll_interval_ms: u32,
    pub orientation_settle_ms: u32,
    pub clip_gap_px: f64,
    pub selectors: StageSelectors,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            design: DesignSize::new(DESIGN_WIDTH, DESIGN_HEIGHT),
            margin_factor: MARGIN_FACTOR,
            anchor_top_px: ANCHOR_TOP_PX,
            zoom_poll_interval_ms: ZOOM_POLL_INTERVAL_MS,
            orientation_settle_ms: ORIENTATION_SETTLE_MS,
            clip_gap_px: CLIP_GAP_PX,
            selectors: StageSelectors::default(),
        }
    }
}

impl StageConfig {
    /// Overrides the design size from raw build-time values, keeping the
    /// defaults for anything missing or unparseable.
    pub fn with_design_overrides(mut self, width: Option<&str>, height: Option<&str>) -> Self {
        if let Some(width) = width.and_then(parse_dimension) {
            self.design.width = width;
        }
        if let Some(height) = height.and_then(parse_dimension) {
            self.design.height = height;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let DesignSize { width, height } = self.design;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidDesignSize { width, height });
        }
        let margin = self.margin_factor;
        if !margin.is_finite() || margin <= 0.0 || margin > 1.0 {
            return Err(ConfigError::InvalidMarginFactor(margin));
        }
        if self.zoom_poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

fn parse_dimension(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_end_matches("px");
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StageConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.design, DesignSize::new(1600.0, 900.0));
        assert_eq!(config.selectors.overlays, vec![".video-modal-content".to_string()]);
    }

    #[test]
    fn design_overrides_parse_or_fall_back() {
        let config = StageConfig::default().with_design_overrides(Some(" 1920px "), Some("tall"));
        assert_eq!(config.design, DesignSize::new(1920.0, 900.0));
        let config = StageConfig::default().with_design_overrides(None, Some("1080"));
        assert_eq!(config.design, DesignSize::new(1600.0, 1080.0));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = StageConfig::default().with_design_overrides(Some("0"), None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDesignSize {
                width: 0.0,
                height: 900.0
            })
        );
        config = StageConfig {
            margin_factor: 1.2,
            ..StageConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMarginFactor(1.2)));
        config = StageConfig {
            zoom_poll_interval_ms: 0,
            ..StageConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));
    }
}
