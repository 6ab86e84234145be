//! # ResizeKit Overlay
//!
//! Interactive image resizing for embeddable rich-text editing surfaces.
//! Clicking an embedded image reveals a positioned overlay; pluggable
//! modules (size display, drag-resize handles, alignment toolbar) attach to
//! that overlay; the overlay tracks the image's on-screen geometry as the
//! document scrolls, reflows, or is edited; delete/backspace removes the
//! image from the host document model.
//!
//! ## Architecture
//!
//! The crate is one component with three cooperating responsibilities:
//!
//! ```text
//! OverlayController (selection state machine)
//!   ├── Overlay (frame geometry + module-contributed children)
//!   └── Modules (DisplaySize, Resize, Toolbar, custom)
//!         └── ModuleRegistry (identifier -> implementation)
//! ```
//!
//! The host editing surface sits behind the [`EditorHost`] contract from
//! `resizekit-core`; the embedding forwards clicks, key releases, pointer
//! events, and document-update notifications into the controller and
//! renders the controller's overlay state after each call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resizekit_overlay::{OverlayController, ResizeOptions};
//!
//! let mut controller = OverlayController::new(host);
//!
//! // forwarded from the embedding's event loop
//! controller.handle_click(Some(clicked_element))?;
//! controller.notify_document_changed();
//! ```

pub mod controller;
pub mod modules;
pub mod options;
pub mod overlay;

pub use controller::OverlayController;
pub use modules::{ModuleCtx, ModuleRegistry, OverlayModule, DISPLAY_SIZE, RESIZE, TOOLBAR};
pub use options::{
    BorderStyle, DisplayStyle, HandleStyle, OverlayStyle, ResizeOptions, ToolbarStyle,
};
pub use overlay::{ChildId, ChildKind, CursorHint, HandleCorner, Overlay, OverlayChild};

pub use resizekit_core::{
    Alignment, EditorHost, ElementId, Error, Key, Point, PointerEvent, PointerPhase, Rect, Result,
    Size, TextSelectMode,
};
