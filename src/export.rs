//! Types shared with the page rasterizer used by the Export button.

use serde::Serialize;
use std::fmt;

/// Options forwarded to the rasterizer as a plain JS object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterizeOptions {
    /// `None` keeps the capture transparent.
    pub background_color: Option<String>,
    pub allow_taint: bool,
    pub scale: f64,
    pub logging: bool,
}

impl RasterizeOptions {
    /// Transparent capture at the device pixel ratio.
    pub fn for_device(pixel_ratio: f64) -> Self {
        let scale = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            background_color: None,
            allow_taint: true,
            scale,
            logging: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The card element was not mounted.
    MissingTarget,
    Rasterize(String),
    /// The rasterizer produced no image data.
    EmptyImage,
    Download(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingTarget => write!(f, "Nothing to export: card is not mounted"),
            ExportError::Rasterize(msg) => write!(f, "Rasterizing the card failed: {}", msg),
            ExportError::EmptyImage => write!(f, "Rasterizer returned no image"),
            ExportError::Download(msg) => write!(f, "Could not start the download: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
