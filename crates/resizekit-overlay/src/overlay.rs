//! The overlay element: a transient positioned frame layered above the
//! editing surface while an image is selected.
//!
//! The overlay owns an ordered set of child nodes contributed by the active
//! modules (corner handles, the size label, toolbar buttons). The embedding
//! renders the frame and its children after every controller call; the
//! controller only manages their geometry and lifetime.

use resizekit_core::{Alignment, Point, Rect};
use smallvec::SmallVec;

use crate::options::OverlayStyle;

/// Cursor the embedding should show while the pointer is over a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Diagonal resize, top-left/bottom-right.
    NwseResize,
    /// Diagonal resize, top-right/bottom-left.
    NeswResize,
    Pointer,
}

/// Corner a resize handle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleCorner {
    /// All corners, in rendering order.
    pub const ALL: [HandleCorner; 4] = [
        HandleCorner::TopLeft,
        HandleCorner::TopRight,
        HandleCorner::BottomLeft,
        HandleCorner::BottomRight,
    ];

    /// Whether this corner sits on the left edge of the overlay.
    pub fn on_left_edge(&self) -> bool {
        matches!(self, HandleCorner::TopLeft | HandleCorner::BottomLeft)
    }

    /// Cursor hint for a handle anchored at this corner.
    pub fn cursor(&self) -> CursorHint {
        match self {
            HandleCorner::TopLeft | HandleCorner::BottomRight => CursorHint::NwseResize,
            HandleCorner::TopRight | HandleCorner::BottomLeft => CursorHint::NeswResize,
        }
    }

    /// Position of this corner for an overlay of the given width/height, in
    /// overlay-local coordinates.
    pub fn anchor(&self, width: f64, height: f64) -> Point {
        match self {
            HandleCorner::TopLeft => Point::new(0.0, 0.0),
            HandleCorner::TopRight => Point::new(width, 0.0),
            HandleCorner::BottomLeft => Point::new(0.0, height),
            HandleCorner::BottomRight => Point::new(width, height),
        }
    }
}

/// What an overlay child renders as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildKind {
    /// A corner drag handle.
    Handle(HandleCorner),
    /// The size readout label.
    SizeLabel,
    /// An alignment toolbar button.
    AlignButton(Alignment),
}

/// Stable identity of an overlay child across updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(u64);

/// A module-contributed node rendered on top of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayChild {
    pub id: ChildId,
    pub kind: ChildKind,
    /// Frame relative to the overlay's own frame.
    pub frame: Rect,
    /// Text content, for label-like children.
    pub label: Option<String>,
    pub cursor: CursorHint,
    /// Marks a child reflecting a currently applied state, e.g. the active
    /// alignment button.
    pub active: bool,
}

/// The positioned overlay element framing the selected image.
#[derive(Debug, Clone)]
pub struct Overlay {
    style: OverlayStyle,
    frame: Rect,
    children: SmallVec<[OverlayChild; 8]>,
    next_child: u64,
}

impl Overlay {
    /// Builds a new overlay styled from the configured overlay style set.
    /// The overlay is not mounted; the controller asks the host to do that.
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            frame: Rect::default(),
            children: SmallVec::new(),
            next_child: 0,
        }
    }

    /// Computes the overlay frame for an image inside a container.
    ///
    /// Rectangles are the live on-screen bounds of the image and the
    /// surface's parent; `scroll` is the parent's scroll offset. The left
    /// edge shifts one pixel to sit the default 1px border flush with the
    /// image.
    pub fn frame_for(image: Rect, container: Rect, scroll: Point) -> Rect {
        Rect::new(
            image.left - container.left - 1.0 + scroll.x,
            image.top - container.top + scroll.y,
            image.width,
            image.height,
        )
    }

    /// The configured overlay style.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Current frame, in container coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The module-contributed children, in insertion order.
    pub fn children(&self) -> &[OverlayChild] {
        &self.children
    }

    /// Adds a child node and returns its id.
    pub fn add_child(&mut self, kind: ChildKind) -> ChildId {
        let id = ChildId(self.next_child);
        self.next_child += 1;
        self.children.push(OverlayChild {
            id,
            kind,
            frame: Rect::default(),
            label: None,
            cursor: CursorHint::Default,
            active: false,
        });
        id
    }

    /// Looks up a child by id.
    pub fn child(&self, id: ChildId) -> Option<&OverlayChild> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Looks up a child for mutation.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut OverlayChild> {
        self.children.iter_mut().find(|c| c.id == id)
    }

    /// Removes a child node. Unknown ids are ignored.
    pub fn remove_child(&mut self, id: ChildId) {
        self.children.retain(|c| c.id != id);
    }

    /// Hit-tests the children against a point in container coordinates,
    /// topmost (most recently added) first.
    pub fn child_at(&self, position: Point) -> Option<ChildId> {
        let origin = self.frame.origin();
        self.children
            .iter()
            .rev()
            .find(|c| {
                c.frame
                    .translated(origin.x, origin.y)
                    .contains(position)
            })
            .map(|c| c.id)
    }
}
