use image::{DynamicImage, Rgb, RgbImage};
use proptest::prelude::*;

use super::{
    CoreError, ImageSet, LoadedImage, MIN_SCALE, ParseRectError, SelectionRect, ViewState,
    ZoomStep, scaled_dimensions,
};

fn solid(name: &str, width: u32, height: u32) -> LoadedImage {
    let pixels = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
    LoadedImage::new(name, DynamicImage::ImageRgb8(pixels))
}

fn three_images() -> ImageSet {
    let mut set = ImageSet::new();
    assert!(set.replace(vec![
        solid("a.png", 200, 200),
        solid("b.png", 200, 200),
        solid("c.png", 200, 200),
    ]));
    set
}

#[test]
fn replace_activates_first_image() {
    let mut set = three_images();
    set.select_active(2).expect("select");
    assert!(set.replace(vec![solid("d.png", 10, 10), solid("e.png", 20, 20)]));
    assert_eq!(set.active_index(), Some(0));
    assert_eq!(set.len(), 2);
    assert_eq!(set.active().map(LoadedImage::file_name), Some("d.png".to_string()));
}

#[test]
fn replace_with_nothing_keeps_current_set() {
    let mut set = three_images();
    set.select_active(1).expect("select");
    assert!(!set.replace(Vec::new()));
    assert_eq!(set.len(), 3);
    assert_eq!(set.active_index(), Some(1));
}

#[test]
fn select_out_of_range_keeps_active_index() {
    let mut set = three_images();
    set.select_active(1).expect("select");
    let error = set.select_active(5).expect_err("must fail");
    assert_eq!(error, CoreError::OutOfRange { index: 5, len: 3 });
    assert_eq!(set.active_index(), Some(1));
}

#[test]
fn empty_set_has_no_active_image() {
    let mut set = ImageSet::new();
    assert_eq!(set.active_index(), None);
    assert!(set.active().is_none());
    assert!(set.select_active(0).is_err());
}

#[test]
fn previews_follow_set_order() {
    let set = three_images();
    let names = set
        .previews()
        .map(|(index, image)| format!("{index}:{}", image.file_name()))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["0:a.png", "1:b.png", "2:c.png"]);
}

#[test]
fn zoom_out_never_drops_below_floor() {
    let mut view = ViewState::default();
    for _ in 0..50 {
        view.zoom(ZoomStep::Out);
    }
    assert!((view.scale() - MIN_SCALE).abs() < f32::EPSILON);
    view.zoom(ZoomStep::In);
    assert!((view.scale() - 0.2).abs() < 1e-5);
}

#[test]
fn wheel_direction_maps_to_zoom() {
    let mut view = ViewState::default();
    assert!(view.apply_wheel(1.0));
    assert!((view.scale() - 1.1).abs() < 1e-5);
    assert!(view.apply_wheel(-3.0));
    assert!((view.scale() - 1.0).abs() < 1e-5);
    assert!(!view.apply_wheel(0.0));

    let mut floor = ViewState::with_scale(MIN_SCALE);
    assert!(!floor.apply_wheel(-1.0));
}

#[test]
fn with_scale_clamps_to_floor() {
    assert_eq!(ViewState::with_scale(0.0).scale(), MIN_SCALE);
    assert_eq!(ViewState::with_scale(-2.0).scale(), MIN_SCALE);
    assert_eq!(ViewState::with_scale(f32::NAN).scale(), MIN_SCALE);
    assert_eq!(ViewState::with_scale(2.5).scale(), 2.5);
}

#[test]
fn scroll_is_bounded_by_content() {
    let mut view = ViewState::default();
    let content = eframe::egui::vec2(500.0, 200.0);
    let viewport = eframe::egui::vec2(300.0, 300.0);
    view.scroll_by(eframe::egui::vec2(1_000.0, 50.0), content, viewport);
    assert_eq!(view.offset, eframe::egui::vec2(200.0, 0.0));
    view.scroll_by(eframe::egui::vec2(-250.0, -10.0), content, viewport);
    assert_eq!(view.offset, eframe::egui::vec2(0.0, 0.0));
}

#[test]
fn scaled_dimensions_floor_and_minimum() {
    assert_eq!(scaled_dimensions(200, 200, 0.5), (100, 100));
    assert_eq!(scaled_dimensions(201, 99, 0.5), (100, 49));
    assert_eq!(scaled_dimensions(4, 4, 0.1), (1, 1));
    assert_eq!(scaled_dimensions(640, 480, 1.5), (960, 720));
}

#[test]
fn stepped_zoom_scales_like_exact_tenths() {
    let mut view = ViewState::default();
    for _ in 0..3 {
        view.zoom(ZoomStep::Out);
    }
    assert_eq!(scaled_dimensions(90, 90, view.scale()), (63, 63));

    for tenths in 1..=30_u32 {
        let scale = tenths as f32 / 10.0;
        for native in 1..=500_u32 {
            let expected = (native * tenths / 10).max(1);
            assert_eq!(
                scaled_dimensions(native, native, scale),
                (expected, expected),
                "native {native} at scale {scale}"
            );
        }
    }
}

#[test]
fn selection_rect_parses_and_rejects() {
    let rect: SelectionRect = "10, 10,60,60".parse().expect("parse");
    assert_eq!(rect, SelectionRect::new(10.0, 10.0, 60.0, 60.0));
    assert_eq!(rect.to_string(), "10,10,60,60");
    assert_eq!(
        "1,2,3".parse::<SelectionRect>(),
        Err(ParseRectError::WrongArity(3))
    );
    assert_eq!(
        "1,2,x,4".parse::<SelectionRect>(),
        Err(ParseRectError::InvalidNumber("x".into()))
    );
    assert!(SelectionRect::UNSET.is_unset());
    assert!(!SelectionRect::at_point(0.0, 1.0).is_unset());
}

proptest! {
    #[test]
    fn any_zoom_sequence_stays_above_floor(steps in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut view = ViewState::default();
        for zoom_in in steps {
            view.zoom(if zoom_in { ZoomStep::In } else { ZoomStep::Out });
            prop_assert!(view.scale() >= MIN_SCALE);
        }
    }
}
