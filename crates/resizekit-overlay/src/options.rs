//! Overlay configuration.
//!
//! Options are a per-session snapshot: user-supplied values are merged over
//! fixed defaults once, when the controller is constructed, and read-only
//! thereafter. Every field carries a serde default so partial JSON or TOML
//! configuration deserializes against the built-in values.

use resizekit_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::modules::{DISPLAY_SIZE, RESIZE, TOOLBAR};

/// Line style of the overlay border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
}

/// Styling for the overlay frame itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Border width in pixels. The reposition math assumes this stays 1px
    /// wide on the left edge.
    pub border_width: f64,
    pub border_style: BorderStyle,
    pub border_color: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_style: BorderStyle::Dashed,
            border_color: "#444".to_string(),
        }
    }
}

/// Styling for each corner drag handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    /// Edge length of the square handle, in pixels.
    pub size: f64,
    pub background: String,
    pub border_width: f64,
    pub border_color: String,
    pub opacity: f64,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            background: "#ffffff".to_string(),
            border_width: 1.0,
            border_color: "#777".to_string(),
            opacity: 0.80,
        }
    }
}

/// Styling for the size readout label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayStyle {
    pub font_size: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub background: String,
    pub color: String,
    pub border_color: String,
    pub opacity: f64,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            padding_x: 8.0,
            padding_y: 4.0,
            background: "#ffffff".to_string(),
            color: "#333".to_string(),
            border_color: "#777".to_string(),
            opacity: 0.80,
        }
    }
}

/// Styling for the alignment toolbar buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarStyle {
    /// Edge length of each square button, in pixels.
    pub button_size: f64,
    /// Gap between adjacent buttons, in pixels.
    pub button_gap: f64,
    pub background: String,
    pub border_color: String,
    pub color: String,
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            button_size: 24.0,
            button_gap: 2.0,
            background: "#ffffff".to_string(),
            border_color: "#999".to_string(),
            color: "#333".to_string(),
        }
    }
}

/// Merged configuration snapshot for the overlay controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    /// Ordered module identifiers to activate on selection. Identifiers
    /// resolve against the module registry, so the list may name well-known
    /// modules or custom registered ones.
    pub modules: Vec<String>,
    pub overlay: OverlayStyle,
    pub handle: HandleStyle,
    pub display: DisplayStyle,
    pub toolbar: ToolbarStyle,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            modules: vec![
                DISPLAY_SIZE.to_string(),
                RESIZE.to_string(),
                TOOLBAR.to_string(),
            ],
            overlay: OverlayStyle::default(),
            handle: HandleStyle::default(),
            display: DisplayStyle::default(),
            toolbar: ToolbarStyle::default(),
        }
    }
}

impl ResizeOptions {
    /// Parses options from a JSON document. Unspecified fields fall back to
    /// the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))
    }

    /// Parses options from a TOML document. Unspecified fields fall back to
    /// the defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::InvalidOptions(e.to_string()))
    }
}
