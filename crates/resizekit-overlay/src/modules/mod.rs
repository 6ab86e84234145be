//! Pluggable overlay modules.
//!
//! A module is a unit of overlay UI (size display, drag handles, alignment
//! toolbar) activated while an image selection exists. Modules follow a
//! fixed lifecycle driven by the controller: a creation hook after
//! construction, an update hook after every reposition, and a teardown hook
//! before the instance is discarded, always in the configured order.

mod display_size;
mod resize;
mod toolbar;

pub use display_size::DisplaySize;
pub use resize::Resize;
pub use toolbar::Toolbar;

use std::collections::HashMap;

use resizekit_core::{EditorHost, ElementId, Error, PointerEvent, Rect, Result};

use crate::options::ResizeOptions;
use crate::overlay::Overlay;

/// Identifier of the size readout module.
pub const DISPLAY_SIZE: &str = "DisplaySize";
/// Identifier of the corner-handle drag-resize module.
pub const RESIZE: &str = "Resize";
/// Identifier of the alignment toolbar module.
pub const TOOLBAR: &str = "Toolbar";

/// Borrowed view of the controller state a module may read and act on
/// during a lifecycle hook.
pub struct ModuleCtx<'a, H: EditorHost> {
    pub host: &'a mut H,
    pub overlay: &'a mut Overlay,
    /// The currently selected image.
    pub image: ElementId,
    pub options: &'a ResizeOptions,
}

impl<'a, H: EditorHost> ModuleCtx<'a, H> {
    /// Live bounding rectangle of the selected image, read fresh from the
    /// host.
    pub fn image_rect(&self) -> Option<Rect> {
        self.host.element_rect(self.image)
    }
}

/// Lifecycle contract every overlay module implements.
pub trait OverlayModule<H: EditorHost> {
    /// Called once after construction; attaches the module's rendering as
    /// children of the overlay.
    fn on_create(&mut self, ctx: &mut ModuleCtx<'_, H>);

    /// Called after every reposition; re-renders to match the current
    /// overlay geometry.
    fn on_update(&mut self, ctx: &mut ModuleCtx<'_, H>);

    /// Called once before the instance is discarded; removes the children
    /// the module installed.
    fn on_destroy(&mut self, ctx: &mut ModuleCtx<'_, H>);

    /// Pointer events forwarded by the controller while the selection is
    /// active. Non-interactive modules ignore them.
    fn on_pointer(&mut self, ctx: &mut ModuleCtx<'_, H>, event: &PointerEvent) {
        let _ = (ctx, event);
    }
}

/// Factory producing a fresh module instance per selection.
pub type ModuleFactory<H> = Box<dyn Fn() -> Box<dyn OverlayModule<H>>>;

/// Table resolving configured module identifiers to implementations.
///
/// The registry starts out with the well-known modules; embeddings register
/// custom implementations under their own identifiers and reference them
/// from the options' module list.
pub struct ModuleRegistry<H: EditorHost> {
    factories: HashMap<String, ModuleFactory<H>>,
}

impl<H: EditorHost> ModuleRegistry<H> {
    /// An empty registry with no known modules.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry pre-populated with the well-known modules.
    pub fn with_known_modules() -> Self {
        let mut registry = Self::empty();
        registry.register(DISPLAY_SIZE, || Box::new(DisplaySize::new()));
        registry.register(RESIZE, || Box::new(Resize::new()));
        registry.register(TOOLBAR, || Box::new(Toolbar::new()));
        registry
    }

    /// Registers a module implementation under an identifier, replacing any
    /// previous registration with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn OverlayModule<H>> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Whether an identifier resolves to a registered implementation.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Constructs a fresh instance for an identifier.
    pub fn build(&self, name: &str) -> Result<Box<dyn OverlayModule<H>>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownModule(name.to_string()))
    }
}

impl<H: EditorHost> Default for ModuleRegistry<H> {
    fn default() -> Self {
        Self::with_known_modules()
    }
}
