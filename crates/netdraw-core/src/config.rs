//! Editor configuration.

use crate::element::ElementGeometry;
use crate::error::ConfigError;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// When a link gets built from the armed elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTrigger {
    /// As soon as a second element is armed.
    #[default]
    OnSecondArm,
    /// Only when the `DrawLink` command is issued.
    Explicit,
}

/// Tunables for the editor core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Placement for elements added without an explicit position.
    pub default_position: Point,
    /// Slack around icons and labels when hit-testing, in world units.
    pub hit_tolerance: f64,
    /// How links are triggered.
    pub link_trigger: LinkTrigger,
    /// Icon and label sizes.
    #[serde(flatten)]
    pub geometry: ElementGeometry,
    /// Arrowhead length for links.
    pub arrow_head_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_position: Point::new(50.0, 50.0),
            hit_tolerance: 2.0,
            link_trigger: LinkTrigger::OnSecondArm,
            geometry: ElementGeometry::default(),
            arrow_head_size: 10.0,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes and tolerances are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                })
            }
        }

        non_negative("hit_tolerance", self.hit_tolerance)?;
        non_negative("icon_size", self.geometry.icon_size)?;
        non_negative("label_font_size", self.geometry.label_font_size)?;
        non_negative("arrow_head_size", self.arrow_head_size)?;
        if !(self.default_position.x.is_finite() && self.default_position.y.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "default_position",
                reason: "coordinates must be finite".to_string(),
            });
        }
        Ok(())
    }
}
