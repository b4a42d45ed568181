use thiserror::Error;

use crate::document::LayerId;
use crate::element::ElementId;

/// Errors raised when constructing a viewport from invalid dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive and finite, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("viewport origin must be finite, got ({x}, {y})")]
    InvalidOrigin { x: f32, y: f32 },
    #[error("viewport scale must be positive and finite, got {0}")]
    InvalidScale(f32),
}

/// Errors reported by a drawable surface when a mutation cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("layer {0} does not exist")]
    LayerNotFound(LayerId),
    #[error("element {0} is already on the surface")]
    DuplicateElement(ElementId),
    #[error("layer {0} is already on the surface")]
    DuplicateLayer(LayerId),
}

/// Errors that can occur while loading or validating a whiteboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse whiteboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("stroke width must be positive, got {0}")]
    InvalidStrokeWidth(f32),
    #[error("zoom sensitivity must be in (-1, 1) and non-zero, got {0}")]
    InvalidZoomSensitivity(f32),
    #[error("pinch threshold must be in [0, 1), got {0}")]
    InvalidPinchThreshold(f32),
    #[error("erase radius must be non-negative, got {0}")]
    InvalidEraseRadius(f32),
}
