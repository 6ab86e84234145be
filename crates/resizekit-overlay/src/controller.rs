//! Selection/overlay lifecycle controller.
//!
//! Owns the single active selection: the selected image, the overlay
//! element, the text-selection suppression guard, and the active module
//! set. The three are created and destroyed together; no other component
//! holds a reference to them that outlives a deselect.

use resizekit_core::{
    EditorHost, ElementId, Error, Key, PointerEvent, Result, TextSelectMode,
};
use tracing::debug;

use crate::modules::{ModuleCtx, ModuleRegistry, OverlayModule};
use crate::options::ResizeOptions;
use crate::overlay::Overlay;

/// Release handle for the text-selection suppression acquired on select.
/// Stores the prior mode so deselect restores exactly what was there.
struct SuppressionGuard {
    prior: TextSelectMode,
}

impl SuppressionGuard {
    fn acquire<H: EditorHost>(host: &mut H) -> Self {
        let prior = host.text_select_mode();
        host.set_text_select_mode(TextSelectMode::Disabled);
        Self { prior }
    }

    fn release<H: EditorHost>(self, host: &mut H) {
        host.set_text_select_mode(self.prior);
    }
}

/// Everything that exists only while an image is selected.
struct ActiveSelection<H: EditorHost> {
    image: ElementId,
    overlay: Overlay,
    suppression: SuppressionGuard,
    modules: Vec<Box<dyn OverlayModule<H>>>,
}

/// The selection/overlay lifecycle controller.
///
/// Listens (through the embedding) for interaction on the editing surface,
/// decides when an image is selected, manages the overlay's geometry, and
/// drives the configured module set's lifecycle. All work happens
/// synchronously inside the event callbacks the embedding forwards.
pub struct OverlayController<H: EditorHost> {
    host: H,
    options: ResizeOptions,
    registry: ModuleRegistry<H>,
    selection: Option<ActiveSelection<H>>,
}

impl<H: EditorHost> OverlayController<H> {
    /// Creates a controller with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, ResizeOptions::default())
    }

    /// Creates a controller with user options merged over the defaults.
    pub fn with_options(mut host: H, options: ResizeOptions) -> Self {
        host.set_native_resize_enabled(false);
        host.ensure_positioning_context();
        Self {
            host,
            options,
            registry: ModuleRegistry::with_known_modules(),
            selection: None,
        }
    }

    /// The host editing surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host editing surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The merged options snapshot.
    pub fn options(&self) -> &ResizeOptions {
        &self.options
    }

    /// The module registry, for registering custom implementations before
    /// they are referenced from the options' module list.
    pub fn registry_mut(&mut self) -> &mut ModuleRegistry<H> {
        &mut self.registry
    }

    /// The currently selected image, if any.
    pub fn image(&self) -> Option<ElementId> {
        self.selection.as_ref().map(|sel| sel.image)
    }

    /// The current overlay, if a selection is active.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.selection.as_ref().map(|sel| &sel.overlay)
    }

    /// Handles a click on the editing surface.
    ///
    /// An image target selects it (re-clicking the current selection is a
    /// no-op; a different image deselects the old one first). Any other
    /// target deselects.
    pub fn handle_click(&mut self, target: Option<ElementId>) -> Result<()> {
        match target {
            Some(element) if self.host.is_image(element) => {
                if self.image() == Some(element) {
                    return Ok(());
                }
                self.select(element)
            }
            _ => {
                self.deselect();
                Ok(())
            }
        }
    }

    /// Selects an image: suppresses native text selection, installs
    /// keyboard/input capture, mounts the overlay, and initializes the
    /// configured modules.
    ///
    /// Replaces any existing selection. Fails if the element is no longer
    /// part of the document or a configured module identifier does not
    /// resolve; on failure every acquired side effect is released again.
    pub fn select(&mut self, image: ElementId) -> Result<()> {
        self.deselect();

        if self.host.element_rect(image).is_none() {
            return Err(Error::StaleElement(image));
        }
        debug!(%image, "selecting image");

        self.host.clear_text_selection();
        let suppression = SuppressionGuard::acquire(&mut self.host);
        self.host.capture_keyboard(true);
        self.host.watch_input(true);

        let overlay = Overlay::new(self.options.overlay.clone());
        self.host.mount_overlay();
        self.selection = Some(ActiveSelection {
            image,
            overlay,
            suppression,
            modules: Vec::new(),
        });
        self.reposition();

        if let Err(err) = self.init_modules() {
            self.deselect();
            return Err(err);
        }
        Ok(())
    }

    /// Clears the active selection: unmounts the overlay, removes the
    /// keyboard/input capture, restores native text selection, and tears
    /// the modules down in creation order. No-op when nothing is selected.
    pub fn deselect(&mut self) {
        let Some(mut sel) = self.selection.take() else {
            return;
        };
        debug!(image = %sel.image, "deselecting image");

        self.host.unmount_overlay();
        self.host.capture_keyboard(false);
        self.host.watch_input(false);

        let mut modules = std::mem::take(&mut sel.modules);
        let mut ctx = ModuleCtx {
            host: &mut self.host,
            overlay: &mut sel.overlay,
            image: sel.image,
            options: &self.options,
        };
        for module in modules.iter_mut() {
            module.on_destroy(&mut ctx);
        }

        sel.suppression.release(&mut self.host);
    }

    /// Destroys the current module instances and builds a fresh set from
    /// the configured identifier list, running each instance's creation
    /// hook and finishing with one update pass. No-op when nothing is
    /// selected.
    pub fn init_modules(&mut self) -> Result<()> {
        self.destroy_modules();
        let Some(sel) = self.selection.as_mut() else {
            return Ok(());
        };

        let mut modules = Vec::with_capacity(self.options.modules.len());
        for name in &self.options.modules {
            modules.push(self.registry.build(name)?);
        }
        debug!(count = modules.len(), "initializing overlay modules");

        let mut ctx = ModuleCtx {
            host: &mut self.host,
            overlay: &mut sel.overlay,
            image: sel.image,
            options: &self.options,
        };
        for module in modules.iter_mut() {
            module.on_create(&mut ctx);
        }
        sel.modules = modules;

        self.update();
        Ok(())
    }

    /// Runs each module's teardown hook in creation order and clears the
    /// instance set. The overlay itself stays up.
    pub fn destroy_modules(&mut self) {
        let Some(sel) = self.selection.as_mut() else {
            return;
        };
        let mut modules = std::mem::take(&mut sel.modules);
        let mut ctx = ModuleCtx {
            host: &mut self.host,
            overlay: &mut sel.overlay,
            image: sel.image,
            options: &self.options,
        };
        for module in modules.iter_mut() {
            module.on_destroy(&mut ctx);
        }
    }

    /// Repositions the overlay over the selected image.
    ///
    /// Geometry is read fresh from the host on every call; nothing is
    /// cached. No-op when nothing is selected or the image's rectangle can
    /// no longer be resolved.
    pub fn reposition(&mut self) {
        let Some(sel) = self.selection.as_mut() else {
            return;
        };
        let Some(image_rect) = self.host.element_rect(sel.image) else {
            return;
        };
        let container = self.host.container_rect();
        let scroll = self.host.scroll_offset();
        sel.overlay
            .set_frame(Overlay::frame_for(image_rect, container, scroll));
    }

    /// Repositions the overlay and runs each module's update hook once, in
    /// creation order. Deselects instead when the image has left the
    /// document. No-op when nothing is selected.
    pub fn update(&mut self) {
        if let Some(image) = self.image() {
            if self.host.element_rect(image).is_none() {
                self.deselect();
                return;
            }
        }
        self.reposition();
        let Some(sel) = self.selection.as_mut() else {
            return;
        };
        let ActiveSelection {
            image,
            overlay,
            modules,
            ..
        } = sel;
        let mut ctx = ModuleCtx {
            host: &mut self.host,
            overlay,
            image: *image,
            options: &self.options,
        };
        for module in modules.iter_mut() {
            module.on_update(&mut ctx);
        }
    }

    /// Host-forwarded notification that the document re-rendered (text
    /// reflow, content edits, scrolling).
    pub fn notify_document_changed(&mut self) {
        self.update();
    }

    /// Handles a key release captured while a selection is active.
    ///
    /// Delete and Backspace issue exactly one host delete for the selected
    /// image, then drop the selection. Other keys, or no active selection,
    /// do nothing.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        let Some(sel) = self.selection.as_ref() else {
            return Ok(());
        };
        if !key.removes_content() {
            return Ok(());
        }
        let image = sel.image;
        debug!(%image, "deleting selected image");
        self.host.delete_element(image)?;
        self.deselect();
        Ok(())
    }

    /// Forwards a pointer event to the active modules in creation order,
    /// then runs an update pass so the overlay tracks any geometry change
    /// the modules caused. No-op when nothing is selected.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let Some(sel) = self.selection.as_mut() else {
            return;
        };
        let ActiveSelection {
            image,
            overlay,
            modules,
            ..
        } = sel;
        let mut ctx = ModuleCtx {
            host: &mut self.host,
            overlay,
            image: *image,
            options: &self.options,
        };
        for module in modules.iter_mut() {
            module.on_pointer(&mut ctx, &event);
        }
        self.update();
    }
}

impl<H: EditorHost> Drop for OverlayController<H> {
    fn drop(&mut self) {
        // a dropped controller must not leave the surface with text
        // selection suppressed or capture installed
        self.deselect();
    }
}
