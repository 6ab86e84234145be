//! # ResizeKit Core
//!
//! Core types, collaborator contracts, and utilities for ResizeKit.
//! Provides the geometry primitives, input event model, element identity,
//! and the `EditorHost` contract that the overlay controller is written
//! against.

pub mod error;
pub mod geometry;
pub mod host;
pub mod input;

pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use host::{Alignment, EditorHost, ElementId, TextSelectMode};
pub use input::{Key, PointerEvent, PointerPhase};
