use std::path::{Path, PathBuf};

use eframe::egui::{pos2, vec2};
use image::{Rgb, RgbImage};
use tempfile::{TempDir, tempdir};

use super::{AppError, CropSession};
use crate::crop::CropError;
use crate::formats::IoError;
use crate::model::{CoreError, SelectionRect};

fn write_batch(dir: &Path, sizes: &[(u32, u32)]) -> Vec<PathBuf> {
    sizes
        .iter()
        .enumerate()
        .map(|(index, (width, height))| {
            let path = dir.join(format!("source_{index}.png"));
            RgbImage::from_pixel(*width, *height, Rgb([index as u8, 0, 0]))
                .save(&path)
                .expect("save source");
            path
        })
        .collect()
}

fn loaded_session() -> (TempDir, CropSession) {
    let dir = tempdir().expect("tempdir");
    let paths = write_batch(dir.path(), &[(200, 200), (200, 200), (200, 200)]);
    let mut session = CropSession::new();
    assert_eq!(session.load_images(&paths).expect("load"), 3);
    (dir, session)
}

fn drag_rect(session: &mut CropSession, from: (f32, f32), to: (f32, f32)) {
    session.notify_resized(vec2(800.0, 600.0));
    session.pointer_pressed(pos2(from.0, from.1));
    session.pointer_dragged(pos2(to.0, to.1));
    session.pointer_released();
}

#[test]
fn load_then_crop_and_export() {
    let (dir, mut session) = loaded_session();
    drag_rect(&mut session, (10.0, 10.0), (60.0, 60.0));
    assert_eq!(session.crop_all().expect("crop"), 3);
    assert_eq!(session.results().dimensions(), vec![(50, 50); 3]);

    let out = dir.path().join("out");
    assert_eq!(session.export(&out).expect("export"), 3);
    assert!(out.join("cropped_3.png").is_file());
}

#[test]
fn empty_load_keeps_previous_batch() {
    let (_dir, mut session) = loaded_session();
    session.select_image(2).expect("select");
    assert_eq!(session.load_images(&[]).expect("no-op"), 0);
    assert_eq!(session.images().len(), 3);
    assert_eq!(session.images().active_index(), Some(2));
}

#[test]
fn failed_load_keeps_previous_batch() {
    let (dir, mut session) = loaded_session();
    let mut paths = write_batch(dir.path(), &[(10, 10)]);
    paths.push(dir.path().join("missing.png"));
    let error = session.load_images(&paths).expect_err("must fail");
    assert!(matches!(error, AppError::Io(IoError::UnreadableImage { .. })));
    assert_eq!(session.images().len(), 3);
}

#[test]
fn selecting_out_of_range_changes_nothing() {
    let (_dir, mut session) = loaded_session();
    session.take_render_request();
    let error = session.select_image(5).expect_err("must fail");
    assert!(matches!(
        error,
        AppError::Core(CoreError::OutOfRange { index: 5, len: 3 })
    ));
    assert_eq!(session.images().active_index(), Some(0));
    assert!(!session.take_render_request());
}

#[test]
fn switching_images_keeps_zoom() {
    let (_dir, mut session) = loaded_session();
    session.zoom_wheel(-1.0);
    session.zoom_wheel(-1.0);
    let scale = session.view().scale();
    session.select_image(1).expect("select");
    assert_eq!(session.view().scale(), scale);
    assert_eq!(session.render_frame().map(|frame| frame.image_index), Some(1));
}

#[test]
fn crop_uses_current_zoom_for_every_image() {
    let dir = tempdir().expect("tempdir");
    let paths = write_batch(dir.path(), &[(200, 200), (200, 200), (200, 200)]);
    let mut session = CropSession::new();
    session.load_images(&paths).expect("load");
    for _ in 0..5 {
        session.zoom_wheel(-1.0);
    }
    assert!((session.view().scale() - 0.5).abs() < 1e-4);
    let transform = session.transform().expect("transform");
    assert_eq!(transform.rendered_size(), (100, 100));

    drag_rect(&mut session, (10.0, 10.0), (60.0, 60.0));
    session.crop_all().expect("crop");
    assert_eq!(session.results().dimensions(), vec![(50, 50); 3]);
}

#[test]
fn crop_failures_keep_previous_results() {
    let (_dir, mut session) = loaded_session();
    drag_rect(&mut session, (0.0, 0.0), (20.0, 30.0));
    session.crop_all().expect("crop");

    let error = session.crop_with(&SelectionRect::UNSET).expect_err("must fail");
    assert!(matches!(error, AppError::Crop(CropError::NoSelectionDefined)));
    assert_eq!(session.results().dimensions(), vec![(20, 30); 3]);
}

#[test]
fn fresh_session_reports_missing_inputs() {
    let mut session = CropSession::new();
    assert!(matches!(
        session.crop_all(),
        Err(AppError::Crop(CropError::NoImagesLoaded))
    ));
    let dir = tempdir().expect("tempdir");
    assert!(matches!(
        session.export(dir.path()),
        Err(AppError::Io(IoError::NothingToExport))
    ));
    assert!(session.render_frame().is_none());
}

#[test]
fn resize_only_requests_render() {
    let (_dir, mut session) = loaded_session();
    session.pan_by(vec2(0.0, 0.0));
    session.take_render_request();
    let view = *session.view();

    session.notify_resized(vec2(320.0, 240.0));
    assert!(session.take_render_request());
    assert_eq!(*session.view(), view);

    session.notify_resized(vec2(320.0, 240.0));
    assert!(!session.take_render_request());
}

#[test]
fn drag_at_edge_scrolls_view() {
    let dir = tempdir().expect("tempdir");
    let paths = write_batch(dir.path(), &[(1_000, 1_000)]);
    let mut session = CropSession::new();
    session.load_images(&paths).expect("load");
    session.notify_resized(vec2(300.0, 300.0));

    session.pointer_pressed(pos2(100.0, 100.0));
    session.pointer_dragged(pos2(295.0, 150.0));
    session.pointer_released();

    assert_eq!(session.view().offset, vec2(10.0, 0.0));
    assert_eq!(
        session.selection().rect(),
        SelectionRect::new(100.0, 100.0, 305.0, 150.0)
    );
    let frame = session.render_frame().expect("frame");
    assert_eq!(frame.selection, Some(session.selection().rect()));
}

#[test]
fn new_press_replaces_commit_and_requests_render() {
    let (_dir, mut session) = loaded_session();
    drag_rect(&mut session, (10.0, 10.0), (60.0, 60.0));
    session.take_render_request();

    session.pointer_pressed(pos2(100.0, 120.0));
    assert!(session.take_render_request());
    assert_eq!(
        session.selection().rect(),
        SelectionRect::at_point(100.0, 120.0)
    );
}
