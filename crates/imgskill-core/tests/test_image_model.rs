mod common;

use std::io::Write;

use common::{jpeg_bytes, opaque_png, png_bytes, BLUE, GREEN, RED, TRANSPARENT};
use imgskill_core::io::image_io::{build, load};
use imgskill_core::model::{ImageModel, Rgb};
use imgskill_core::ImgSkillError;

#[test]
fn test_build_png_dimensions_and_samples() {
    let bytes = opaque_png(3, 2, &[RED, GREEN, BLUE, BLUE, GREEN, RED]);
    let model = build(&bytes, "banner.png").unwrap();

    assert_eq!(model.name(), "banner");
    assert_eq!(model.width(), 3);
    assert_eq!(model.height(), 2);
    assert_eq!(model.samples().len(), 6);
    assert_eq!(model.sample(0, 0).unwrap().color, Rgb::new(255, 0, 0));
    assert_eq!(model.sample(2, 1).unwrap().color, Rgb::new(255, 0, 0));
    assert_eq!(model.sample(0, 1).unwrap().color, Rgb::new(0, 0, 255));
    assert!(model.sample(3, 0).is_none());
    assert!(model.sample(0, 2).is_none());
}

#[test]
fn test_samples_are_row_major() {
    let bytes = opaque_png(3, 3, &[RED; 9]);
    let model = build(&bytes, "grid.png").unwrap();

    for (i, s) in model.samples().iter().enumerate() {
        assert_eq!(s.column, (i % 3) as u32);
        assert_eq!(s.row, (i / 3) as u32);
    }
}

#[test]
fn test_alpha_channel_preserved() {
    let bytes = png_bytes(2, 1, &[[10, 20, 30, 128], TRANSPARENT]);
    let model = build(&bytes, "alpha.png").unwrap();

    let first = model.sample(0, 0).unwrap();
    assert_eq!(first.opacity, 128);
    assert_eq!(first.color, Rgb::new(10, 20, 30));
    assert!(first.is_visible());
    assert!(!model.sample(1, 0).unwrap().is_visible());
    assert_eq!(model.visible_count(), 1);
}

#[test]
fn test_jpeg_is_fully_opaque() {
    let bytes = jpeg_bytes(4, 4, [200, 100, 50]);
    let model = build(&bytes, "photo.jpg").unwrap();

    assert_eq!(model.width(), 4);
    assert_eq!(model.height(), 4);
    assert!(model.samples().iter().all(|s| s.opacity == 255));
    assert_eq!(model.visible_count(), 16);
}

#[test]
fn test_format_sniffed_not_extension() {
    let bytes = opaque_png(1, 1, &[GREEN]);
    let model = build(&bytes, "mislabeled.jpg").unwrap();
    assert_eq!(model.sample(0, 0).unwrap().color, Rgb::new(0, 255, 0));
}

#[test]
fn test_empty_bytes_is_decode_error() {
    let err = build(&[], "empty.png").unwrap_err();
    assert!(err.is_decode_error(), "got: {err}");
}

#[test]
fn test_truncated_png_is_decode_error() {
    let bytes = opaque_png(8, 8, &[RED; 64]);
    let truncated = &bytes[..bytes.len() / 2];
    let err = build(truncated, "cut.png").unwrap_err();
    assert!(matches!(err, ImgSkillError::Decode { .. }), "got: {err}");
}

#[test]
fn test_garbage_bytes_is_decode_error() {
    let err = build(b"definitely not an image", "notes.txt").unwrap_err();
    match err {
        ImgSkillError::Decode { name, .. } => assert_eq!(name, "notes.txt"),
        other => panic!("expected decode error, got {other}"),
    }
}

#[test]
fn test_naming_from_source_name() {
    let bytes = opaque_png(1, 1, &[RED]);
    let model = build(&bytes, "my photo.PNG").unwrap();
    assert_eq!(model.name(), "my_photo");
    assert_eq!(model.output_filename(), "my_photo.yml");
}

#[test]
fn test_fallback_name_when_nothing_survives() {
    let bytes = opaque_png(1, 1, &[RED]);
    let a = build(&bytes, "???.png").unwrap();
    let b = build(&bytes, "!!!.png").unwrap();
    assert!(a.name().starts_with("image_"), "got: {}", a.name());
    assert_eq!(a.name(), b.name());
}

#[test]
fn test_from_rgba_rejects_zero_area() {
    let err = ImageModel::from_rgba("x".into(), 0, 5, &[]).unwrap_err();
    assert!(matches!(
        err,
        ImgSkillError::EmptyImage {
            width: 0,
            height: 5
        }
    ));
}

#[test]
fn test_from_rgba_rejects_short_buffer() {
    let err = ImageModel::from_rgba("x".into(), 2, 2, &[0; 12]).unwrap_err();
    assert!(matches!(err, ImgSkillError::Validation { field: "rgba", .. }));
}

#[test]
fn test_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Logo Final.png");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&opaque_png(2, 2, &[RED, GREEN, BLUE, RED])).unwrap();
    drop(f);

    let model = load(&path).unwrap();
    assert_eq!(model.name(), "Logo_Final");
    assert_eq!(model.visible_count(), 4);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ImgSkillError::Io(_)));
}
