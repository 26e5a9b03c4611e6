//! # Settings Module
//!
//! Export configuration threaded through the conversion.
//!
//! ## Key Types
//! - `ExportSettings`: scale factor and optional canvas centring.
//! - `CanvasSize`: Lottie composition extents.

use crate::errors::ShapeError;
use serde::{Deserialize, Serialize};

/// Lottie composition extents in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Pixels per Synfig unit.
    pub pix_per_unit: f32,
    /// When set, points are centred on the canvas after the axis flip.
    pub canvas: Option<CanvasSize>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            pix_per_unit: 60.0,
            canvas: None,
        }
    }
}

impl ExportSettings {
    pub fn from_json_str(text: &str) -> Result<Self, ShapeError> {
        let settings: ExportSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.pix_per_unit > 0.0) {
            return Err(ShapeError::Settings(format!(
                "pix_per_unit must be positive, got {}",
                self.pix_per_unit
            )));
        }
        Ok(())
    }
}
