//! Drag-resize module: four corner handles that resize the selected image
//! through the host.

use resizekit_core::{EditorHost, PointerEvent, PointerPhase, Rect};
use smallvec::SmallVec;

use crate::overlay::{ChildId, ChildKind, HandleCorner};

use super::{ModuleCtx, OverlayModule};

/// Smallest width a drag may shrink an image to, in pixels.
const MIN_WIDTH: f64 = 1.0;

struct DragState {
    corner: HandleCorner,
    start_x: f64,
    start_width: f64,
}

/// Renders a square handle on each overlay corner; dragging a handle
/// computes a new image width from the horizontal pointer delta and applies
/// it through the host. Height follows the image's aspect ratio, so only
/// width is written.
pub struct Resize {
    handles: SmallVec<[ChildId; 4]>,
    drag: Option<DragState>,
}

impl Resize {
    /// Creates the module with no rendering attached yet.
    pub fn new() -> Self {
        Self {
            handles: SmallVec::new(),
            drag: None,
        }
    }
}

impl Default for Resize {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: EditorHost> OverlayModule<H> for Resize {
    fn on_create(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        for corner in HandleCorner::ALL {
            let id = ctx.overlay.add_child(ChildKind::Handle(corner));
            if let Some(child) = ctx.overlay.child_mut(id) {
                child.cursor = corner.cursor();
            }
            self.handles.push(id);
        }
    }

    fn on_update(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        let frame = ctx.overlay.frame();
        let size = ctx.options.handle.size;
        for &id in &self.handles {
            if let Some(child) = ctx.overlay.child_mut(id) {
                if let ChildKind::Handle(corner) = child.kind {
                    let anchor = corner.anchor(frame.width, frame.height);
                    // handles are centered on their corner
                    child.frame = Rect::new(
                        anchor.x - size / 2.0,
                        anchor.y - size / 2.0,
                        size,
                        size,
                    );
                }
            }
        }
    }

    fn on_destroy(&mut self, ctx: &mut ModuleCtx<'_, H>) {
        for id in self.handles.drain(..) {
            ctx.overlay.remove_child(id);
        }
        self.drag = None;
    }

    fn on_pointer(&mut self, ctx: &mut ModuleCtx<'_, H>, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Pressed => {
                let Some(id) = ctx.overlay.child_at(event.position) else {
                    return;
                };
                if !self.handles.contains(&id) {
                    return;
                }
                let Some(ChildKind::Handle(corner)) = ctx.overlay.child(id).map(|c| c.kind) else {
                    return;
                };
                let Some(image) = ctx.image_rect() else { return };
                self.drag = Some(DragState {
                    corner,
                    start_x: event.position.x,
                    start_width: image.width,
                });
            }
            PointerPhase::Moved => {
                let Some(drag) = &self.drag else { return };
                let delta = event.position.x - drag.start_x;
                let delta = if drag.corner.on_left_edge() {
                    -delta
                } else {
                    delta
                };
                let width = (drag.start_width + delta).round().max(MIN_WIDTH);
                ctx.host.set_element_width(ctx.image, width);
            }
            PointerPhase::Released => {
                self.drag = None;
            }
        }
    }
}
