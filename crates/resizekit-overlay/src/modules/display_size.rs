//! Size readout module: a label tracking the selected image's current
//! pixel dimensions.

use resizekit_core::{EditorHost, Rect};

use crate::overlay::{ChildId, ChildKind};

use super::{ModuleCtx, OverlayModule};

/// Distance between the label and the overlay edge, in pixels.
const EDGE_MARGIN: f64 = 4.0;

/// Approximate glyph advance of the default UI font, as a fraction of the
/// font size. Good enough for a label frame the embedding may refine.
const CHAR_ADVANCE: f64 = 0.6;

/// Renders the image's rounded `width × height` near the overlay's
/// bottom-right corner, moving outside the frame when the image is too
/// small to contain it.
pub struct DisplaySize {
    label: Option<ChildId>,
}

impl DisplaySize {
    /// Creates the module with no rendering attached yet.
    pub fn new() -> Self {
        Self { label: None }
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: EditorHost> OverlayModule<H> for DisplaySize {
    fn on_create(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        self.label = Some(ctx.overlay.add_child(ChildKind::SizeLabel));
    }

    fn on_update(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        let Some(id) = self.label else { return };
        let Some(image) = ctx.image_rect() else { return };

        let style = &ctx.options.display;
        let text = format!(
            "{} × {}",
            image.width.round() as i64,
            image.height.round() as i64
        );
        let label_width =
            text.chars().count() as f64 * style.font_size * CHAR_ADVANCE + 2.0 * style.padding_x;
        let label_height = style.font_size + 2.0 * style.padding_y;

        let overlay = ctx.overlay.frame();
        let frame = if overlay.width > 120.0 && overlay.height > 30.0 {
            // inside the bottom-right corner
            Rect::new(
                overlay.width - label_width - EDGE_MARGIN,
                overlay.height - label_height - EDGE_MARGIN,
                label_width,
                label_height,
            )
        } else {
            // image too small; hang the label off the corner instead
            Rect::new(
                overlay.width + EDGE_MARGIN,
                overlay.height + EDGE_MARGIN,
                label_width,
                label_height,
            )
        };

        if let Some(child) = ctx.overlay.child_mut(id) {
            child.label = Some(text);
            child.frame = frame;
        }
    }

    fn on_destroy(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        if let Some(id) = self.label.take() {
            ctx.overlay.remove_child(id);
        }
    }
}
