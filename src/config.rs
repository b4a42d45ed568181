use serde::{Deserialize, Serialize};

use crate::element::StrokeStyle;
use crate::error::ConfigError;
use crate::viewport::Viewport;

/// Initial visible rectangle in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Tunables for a whiteboard. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    pub view_box: ViewBox,
    pub scale: f32,
    /// Wheel zoom per pixel of scroll
    pub zoom_sensitivity: f32,
    /// Relative pinch distance change needed before a zoom step
    pub pinch_threshold: f32,
    /// Eraser reach in screen pixels
    pub erase_radius: f32,
    pub style: StrokeStyle,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            view_box: ViewBox::default(),
            scale: 1.0,
            zoom_sensitivity: 0.001,
            pinch_threshold: 0.01,
            erase_radius: 6.0,
            style: StrokeStyle::default(),
        }
    }
}

impl WhiteboardConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport()?;

        let width = self.style.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(width));
        }
        let sensitivity = self.zoom_sensitivity;
        if !sensitivity.is_finite() || sensitivity == 0.0 || sensitivity.abs() >= 1.0 {
            return Err(ConfigError::InvalidZoomSensitivity(sensitivity));
        }
        let threshold = self.pinch_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::InvalidPinchThreshold(threshold));
        }
        let radius = self.erase_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidEraseRadius(radius));
        }
        Ok(())
    }

    /// The starting viewport described by this config
    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        let ViewBox { x, y, width, height } = self.view_box;
        Ok(Viewport::with_scale(x, y, width, height, self.scale)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewportError;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WhiteboardConfig::from_json(r#"{ "erase_radius": 10.0 }"#).unwrap();
        assert_eq!(config.erase_radius, 10.0);
        assert_eq!(config.view_box, ViewBox::default());
        assert_eq!(config.zoom_sensitivity, 0.001);
    }

    #[test]
    fn test_round_trip() {
        let config = WhiteboardConfig {
            scale: 2.0,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(WhiteboardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let json = r#"{ "view_box": { "x": 0, "y": 0, "width": 0, "height": 600 } }"#;
        let err = WhiteboardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Viewport(ViewportError::InvalidSize { .. })));

        let err = WhiteboardConfig::from_json(r#"{ "pinch_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPinchThreshold(_)));

        let err = WhiteboardConfig::from_json(r#"{ "zoom_sensitivity": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidZoomSensitivity(_)));

        assert!(matches!(
            WhiteboardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
