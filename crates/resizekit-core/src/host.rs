//! The editing-surface collaborator contract.
//!
//! The overlay controller never touches the host document directly. Every
//! side effect it needs (geometry queries, caret clearing, text-selection
//! suppression, event capture, overlay mounting, content deletion) goes
//! through the [`EditorHost`] trait, implemented by the embedding around
//! whatever editing surface it integrates with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Identity of a rendered element inside the editing surface.
///
/// An id refers to the element itself, not a copy of its state; the host
/// resolves it back to live geometry on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.0)
    }
}

/// Horizontal alignment applied to an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Center => write!(f, "center"),
            Alignment::Right => write!(f, "right"),
        }
    }
}

/// Native text-selection mode of the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSelectMode {
    /// Text can be selected normally.
    #[default]
    Auto,
    /// Native text selection is suppressed.
    Disabled,
}

/// Contract the embedding implements around its editing surface.
///
/// Geometry queries must always return live values; the controller
/// deliberately never caches a rectangle across calls, since the image may
/// move due to scrolling, window resizing, or content edits.
pub trait EditorHost {
    /// Bounding rectangle of the surface's parent element, in viewport
    /// coordinates.
    fn container_rect(&self) -> Rect;

    /// Current scroll offsets of the surface's parent element.
    fn scroll_offset(&self) -> Point;

    /// Live bounding rectangle of an element, or `None` once the element is
    /// no longer part of the document.
    fn element_rect(&self, element: ElementId) -> Option<Rect>;

    /// Whether the element is an embedded image.
    fn is_image(&self, element: ElementId) -> bool;

    /// Clears any active text caret or range on the surface.
    fn clear_text_selection(&mut self);

    /// Current text-selection mode of the document root.
    fn text_select_mode(&self) -> TextSelectMode;

    /// Applies a text-selection mode to the surface and the document root.
    fn set_text_select_mode(&mut self, mode: TextSelectMode);

    /// Installs or removes document-level keyboard capture.
    fn capture_keyboard(&mut self, captured: bool);

    /// Starts or stops watching the surface for input mutations.
    fn watch_input(&mut self, watching: bool);

    /// Attaches the controller's overlay as the last child of the surface's
    /// parent element.
    fn mount_overlay(&mut self);

    /// Detaches the controller's overlay from the surface's parent element.
    fn unmount_overlay(&mut self);

    /// Removes an element from the host document model, at offset zero of
    /// that element's document position.
    fn delete_element(&mut self, element: ElementId) -> Result<()>;

    /// Enables or disables the surface's own built-in object resizing.
    fn set_native_resize_enabled(&mut self, enabled: bool);

    /// Ensures the surface's parent element establishes a positioning
    /// context the overlay can be laid out against.
    fn ensure_positioning_context(&mut self);

    /// Sets the displayed width of an image element, in pixels. Height
    /// follows the image's intrinsic aspect ratio.
    fn set_element_width(&mut self, element: ElementId, width: f64);

    /// The alignment currently applied to an image element, if any.
    fn element_alignment(&self, element: ElementId) -> Option<Alignment>;

    /// Applies a horizontal alignment to an image element, or clears it.
    fn set_element_alignment(&mut self, element: ElementId, alignment: Option<Alignment>);
}
