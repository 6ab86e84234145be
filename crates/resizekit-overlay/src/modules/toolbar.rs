//! Alignment toolbar module: left/center/right buttons rendered above the
//! overlay.

use resizekit_core::{Alignment, EditorHost, PointerEvent, PointerPhase, Rect};
use smallvec::SmallVec;

use crate::overlay::{ChildId, ChildKind, CursorHint};

use super::{ModuleCtx, OverlayModule};

/// Vertical gap between the button row and the overlay's top edge.
const ROW_OFFSET: f64 = 4.0;

const ALIGNMENTS: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

/// Renders one button per alignment; pressing a button applies that
/// alignment to the selected image through the host, and pressing the
/// currently applied one clears it.
pub struct Toolbar {
    buttons: SmallVec<[ChildId; 3]>,
}

impl Toolbar {
    /// Creates the module with no rendering attached yet.
    pub fn new() -> Self {
        Self {
            buttons: SmallVec::new(),
        }
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: EditorHost> OverlayModule<H> for Toolbar {
    fn on_create(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        for alignment in ALIGNMENTS {
            let id = ctx.overlay.add_child(ChildKind::AlignButton(alignment));
            if let Some(child) = ctx.overlay.child_mut(id) {
                child.cursor = CursorHint::Pointer;
                child.label = Some(alignment.to_string());
            }
            self.buttons.push(id);
        }
    }

    fn on_update(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        let style = &ctx.options.toolbar;
        let size = style.button_size;
        let gap = style.button_gap;
        let applied = ctx.host.element_alignment(ctx.image);

        for (index, &id) in self.buttons.iter().enumerate() {
            if let Some(child) = ctx.overlay.child_mut(id) {
                child.frame = Rect::new(
                    index as f64 * (size + gap),
                    -(size + ROW_OFFSET),
                    size,
                    size,
                );
                if let ChildKind::AlignButton(alignment) = child.kind {
                    child.active = applied == Some(alignment);
                }
            }
        }
    }

    fn on_destroy(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        for id in self.buttons.drain(..) {
            ctx.overlay.remove_child(id);
        }
    }

    fn on_pointer(&mut self, ctx: &mut ModuleCtx<'_, H>, event: &PointerEvent) {
        if event.phase != PointerPhase::Pressed {
            return;
        }
        let Some(id) = ctx.overlay.child_at(event.position) else {
            return;
        };
        if !self.buttons.contains(&id) {
            return;
        }
        let Some(ChildKind::AlignButton(alignment)) = ctx.overlay.child(id).map(|c| c.kind) else {
            return;
        };

        // pressing the applied alignment toggles it off
        let applied = ctx.host.element_alignment(ctx.image);
        if applied == Some(alignment) {
            ctx.host.set_element_alignment(ctx.image, None);
        } else {
            ctx.host.set_element_alignment(ctx.image, Some(alignment));
        }
    }
}
