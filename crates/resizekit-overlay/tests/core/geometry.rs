//! Overlay frame geometry: the border/scroll corrections and their
//! invariants under translation.

use proptest::prelude::*;
use resizekit_overlay::{Overlay, Point, Rect};

#[test]
fn test_worked_example_from_scrolled_container() {
    // container scrolled by (10, 20), image at (110, 220) sized 50x30,
    // container at (100, 200)
    let frame = Overlay::frame_for(
        Rect::new(110.0, 220.0, 50.0, 30.0),
        Rect::new(100.0, 200.0, 640.0, 480.0),
        Point::new(10.0, 20.0),
    );
    assert_eq!(frame, Rect::new(19.0, 40.0, 50.0, 30.0));
}

#[test]
fn test_left_edge_carries_border_correction() {
    let frame = Overlay::frame_for(
        Rect::new(100.0, 100.0, 10.0, 10.0),
        Rect::new(100.0, 100.0, 640.0, 480.0),
        Point::ZERO,
    );
    // only the left edge shifts for the 1px border; top does not
    assert_eq!(frame.left, -1.0);
    assert_eq!(frame.top, 0.0);
}

// integer-valued coordinates keep the f64 arithmetic exact
fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-1000i32..1000, -1000i32..1000, 1i32..500, 1i32..500)
        .prop_map(|(l, t, w, h)| Rect::new(l as f64, t as f64, w as f64, h as f64))
}

proptest! {
    #[test]
    fn prop_frame_matches_image_size(image in rect_strategy(), container in rect_strategy()) {
        let frame = Overlay::frame_for(image, container, Point::ZERO);
        prop_assert_eq!(frame.width, image.width);
        prop_assert_eq!(frame.height, image.height);
    }

    #[test]
    fn prop_scroll_translates_frame(
        image in rect_strategy(),
        container in rect_strategy(),
        sx in -200i32..200,
        sy in -200i32..200,
    ) {
        let unscrolled = Overlay::frame_for(image, container, Point::ZERO);
        let scrolled =
            Overlay::frame_for(image, container, Point::new(sx as f64, sy as f64));
        prop_assert_eq!(scrolled, unscrolled.translated(sx as f64, sy as f64));
    }

    #[test]
    fn prop_common_translation_cancels(
        image in rect_strategy(),
        container in rect_strategy(),
        dx in -500i32..500,
        dy in -500i32..500,
    ) {
        let base = Overlay::frame_for(image, container, Point::ZERO);
        let moved = Overlay::frame_for(
            image.translated(dx as f64, dy as f64),
            container.translated(dx as f64, dy as f64),
            Point::ZERO,
        );
        prop_assert_eq!(base, moved);
    }
}
