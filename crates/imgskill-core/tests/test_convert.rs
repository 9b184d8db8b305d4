mod common;

use common::{opaque_png, png_bytes, BLUE, RED, TRANSPARENT};
use imgskill_core::io::script_writer::{save_script, write_script};
use imgskill_core::params::{ConversionParameters, Mode};
use imgskill_core::{convert, ImgSkillError};

#[test]
fn test_convert_produces_named_document() {
    let bytes = opaque_png(1, 2, &[RED, BLUE]);
    let conversion = convert(&bytes, "my photo.PNG", &ConversionParameters::default()).unwrap();

    assert_eq!(conversion.filename(), "my_photo.yml");
    assert_eq!(conversion.image().name(), "my_photo");
    let lines: Vec<String> = conversion.lines().unwrap().collect();
    assert_eq!(lines[0], "my_photo:");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_lines_can_be_regenerated() {
    let bytes = opaque_png(2, 1, &[RED, BLUE]);
    let conversion = convert(&bytes, "twice.png", &ConversionParameters::default()).unwrap();

    let a: Vec<String> = conversion.lines().unwrap().collect();
    let b: Vec<String> = conversion.lines().unwrap().collect();
    assert_eq!(a, b);
}

#[test]
fn test_convert_rejects_bad_params_before_decoding() {
    let params = ConversionParameters {
        particle_size: 0.0,
        ..Default::default()
    };
    let err = convert(b"garbage", "bad.png", &params).unwrap_err();
    assert!(matches!(
        err,
        ImgSkillError::Validation {
            field: "particle_size",
            ..
        }
    ));
}

#[test]
fn test_convert_surfaces_decode_error() {
    let err = convert(&[], "empty.png", &ConversionParameters::default()).unwrap_err();
    assert!(err.is_decode_error());
}

#[test]
fn test_write_script_counts_and_terminates_lines() {
    let bytes = png_bytes(2, 1, &[[255, 0, 0, 255], TRANSPARENT]);
    let params = ConversionParameters {
        mode: Mode::Vertical,
        ..Default::default()
    };
    let conversion = convert(&bytes, "dot.png", &params).unwrap();

    let mut out = Vec::new();
    let count = write_script(&mut out, conversion.lines().unwrap()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        text,
        "dot:\n  Skills:\n  - effect:particles{p=flame;a=1;s=0;size=1.0;color=#FF0000;fo=0.0;so=0.0;yo=0.0;delay=0.0} @self\n"
    );
}

#[test]
fn test_save_script_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = opaque_png(1, 1, &[RED]);
    let conversion = convert(&bytes, "uploads/Boss Arena.jpg", &ConversionParameters::default())
        .unwrap();

    let path = save_script(&conversion, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("Boss_Arena.yml"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Boss_Arena:\n  Skills:\n"));
    assert!(contents.ends_with("@self\n"));
}

#[test]
fn test_renamed_changes_skill_and_filename() {
    let bytes = opaque_png(1, 1, &[RED]);
    let conversion = convert(&bytes, "logo.png", &ConversionParameters::default())
        .unwrap()
        .renamed("logo_2");

    assert_eq!(conversion.filename(), "logo_2.yml");
    let lines: Vec<String> = conversion.lines().unwrap().collect();
    assert_eq!(lines[0], "logo_2:");
}

#[test]
fn test_renamed_ignores_unusable_name() {
    let bytes = opaque_png(1, 1, &[RED]);
    let conversion = convert(&bytes, "logo.png", &ConversionParameters::default())
        .unwrap()
        .renamed("???");
    assert_eq!(conversion.filename(), "logo.yml");
}
