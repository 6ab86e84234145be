//! Scripted editing surface for controller tests.

use std::collections::HashMap;

use resizekit_overlay::{
    Alignment, EditorHost, ElementId, Error, Point, Rect, Result, TextSelectMode,
};

/// One recorded host side effect, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearTextSelection,
    SetTextSelectMode(TextSelectMode),
    CaptureKeyboard(bool),
    WatchInput(bool),
    MountOverlay,
    UnmountOverlay,
    Delete(ElementId),
    SetWidth(ElementId, f64),
    SetAlignment(ElementId, Option<Alignment>),
}

/// In-memory editing surface: a container rectangle, a set of image
/// elements with live bounds, and a log of every side effect requested.
pub struct MockSurface {
    pub container: Rect,
    pub scroll: Point,
    pub select_mode: TextSelectMode,
    pub keyboard_captured: bool,
    pub input_watched: bool,
    pub overlay_mounted: bool,
    pub native_resize_enabled: bool,
    pub positioned: bool,
    pub calls: Vec<Call>,
    images: HashMap<ElementId, Rect>,
    alignments: HashMap<ElementId, Alignment>,
}

impl MockSurface {
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            scroll: Point::ZERO,
            select_mode: TextSelectMode::Auto,
            keyboard_captured: false,
            input_watched: false,
            overlay_mounted: false,
            native_resize_enabled: true,
            positioned: false,
            calls: Vec::new(),
            images: HashMap::new(),
            alignments: HashMap::new(),
        }
    }

    /// Adds an image element with the given on-screen bounds.
    pub fn add_image(&mut self, id: u64, rect: Rect) -> ElementId {
        let element = ElementId(id);
        self.images.insert(element, rect);
        element
    }

    /// An element id that is not an image (a text run, say). Non-image
    /// elements have no tracked geometry.
    pub fn add_text(&mut self, id: u64) -> ElementId {
        ElementId(id)
    }

    /// Removes an image out-of-band, as an external edit would.
    pub fn remove_image(&mut self, element: ElementId) {
        self.images.remove(&element);
    }

    /// Moves an image, as scrolling or a reflow would.
    pub fn move_image(&mut self, element: ElementId, rect: Rect) {
        self.images.insert(element, rect);
    }

    pub fn image_width(&self, element: ElementId) -> Option<f64> {
        self.images.get(&element).map(|r| r.width)
    }

    pub fn mount_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::MountOverlay).count()
    }

    pub fn unmount_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == Call::UnmountOverlay)
            .count()
    }

    pub fn delete_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Delete(_)))
            .count()
    }
}

impl EditorHost for MockSurface {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.images.get(&element).copied()
    }

    fn is_image(&self, element: ElementId) -> bool {
        self.images.contains_key(&element)
    }

    fn clear_text_selection(&mut self) {
        self.calls.push(Call::ClearTextSelection);
    }

    fn text_select_mode(&self) -> TextSelectMode {
        self.select_mode
    }

    fn set_text_select_mode(&mut self, mode: TextSelectMode) {
        self.select_mode = mode;
        self.calls.push(Call::SetTextSelectMode(mode));
    }

    fn capture_keyboard(&mut self, captured: bool) {
        self.keyboard_captured = captured;
        self.calls.push(Call::CaptureKeyboard(captured));
    }

    fn watch_input(&mut self, watching: bool) {
        self.input_watched = watching;
        self.calls.push(Call::WatchInput(watching));
    }

    fn mount_overlay(&mut self) {
        self.overlay_mounted = true;
        self.calls.push(Call::MountOverlay);
    }

    fn unmount_overlay(&mut self) {
        self.overlay_mounted = false;
        self.calls.push(Call::UnmountOverlay);
    }

    fn delete_element(&mut self, element: ElementId) -> Result<()> {
        self.calls.push(Call::Delete(element));
        if self.images.remove(&element).is_none() {
            return Err(Error::StaleElement(element));
        }
        Ok(())
    }

    fn set_native_resize_enabled(&mut self, enabled: bool) {
        self.native_resize_enabled = enabled;
    }

    fn ensure_positioning_context(&mut self) {
        self.positioned = true;
    }

    fn set_element_width(&mut self, element: ElementId, width: f64) {
        self.calls.push(Call::SetWidth(element, width));
        if let Some(rect) = self.images.get_mut(&element) {
            // height follows the aspect ratio, like an <img> with only a
            // width attribute
            if rect.width > 0.0 {
                rect.height *= width / rect.width;
            }
            rect.width = width;
        }
    }

    fn element_alignment(&self, element: ElementId) -> Option<Alignment> {
        self.alignments.get(&element).copied()
    }

    fn set_element_alignment(&mut self, element: ElementId, alignment: Option<Alignment>) {
        self.calls.push(Call::SetAlignment(element, alignment));
        match alignment {
            Some(a) => {
                self.alignments.insert(element, a);
            }
            None => {
                self.alignments.remove(&element);
            }
        }
    }
}
