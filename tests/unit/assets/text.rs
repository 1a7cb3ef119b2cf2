use super::*;
use crate::assets::fonts::{FontCandidates, FontRole};
use crate::geometry::lockup::TITLE_SEGMENTS;
use crate::layout::tracking::tracked_width;

fn host_bold_font() -> Option<FontBytes> {
    match FontCandidates::default().resolve(FontRole::Bold) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("skipping: no font available on this host ({e})");
            None
        }
    }
}

#[test]
fn rejects_invalid_size() {
    let font = FontBytes {
        origin: FontOrigin::Path("unused.ttf".into()),
        data: std::sync::Arc::new(Vec::new()),
        index: 0,
    };
    assert!(matches!(
        TextFace::new(&font, 0.0),
        Err(BrandError::Validation(_))
    ));
    assert!(TextFace::new(&font, f32::NAN).is_err());
}

#[test]
fn garbage_bytes_are_a_font_error() {
    let font = FontBytes {
        origin: FontOrigin::Path("garbage.ttf".into()),
        data: std::sync::Arc::new(b"definitely not an sfnt".to_vec()),
        index: 0,
    };
    assert!(matches!(TextFace::new(&font, 24.0), Err(BrandError::Font(_))));
}

#[test]
fn title_segment_widths_positive_and_monotonic() {
    let Some(font) = host_bold_font() else { return };

    let mut prev = [0.0f64; 3];
    for size in [24.0f32, 72.0, 144.0] {
        let mut face = TextFace::new(&font, size).unwrap();
        assert!(!face.family_name().is_empty());
        for (i, seg) in TITLE_SEGMENTS.iter().enumerate() {
            let w = tracked_width(&mut face, seg.text, 1.2).unwrap();
            assert!(w > 0.0, "segment {:?} has zero width at {size}px", seg.text);
            assert!(w >= prev[i]);
            prev[i] = w;
        }
    }
}

#[test]
fn space_has_advance_and_widths_are_cached() {
    let Some(font) = host_bold_font() else { return };
    let mut face = TextFace::new(&font, 72.0).unwrap();
    let space = face.char_width(' ').unwrap();
    assert!(space > 0.0);
    assert_eq!(face.char_width(' ').unwrap(), space);
    assert!(face.char_width('W').unwrap() >= face.char_width('I').unwrap());
}

#[test]
fn glyphs_sit_on_the_baseline() {
    let Some(font) = host_bold_font() else { return };
    let mut face = TextFace::new(&font, 72.0).unwrap();
    let glyphs = face.glyphs("A");
    assert_eq!(glyphs.len(), 1);
    assert!(glyphs[0].y.abs() < 1e-3);
    assert!(glyphs[0].x.abs() < 1e-3);
}

#[test]
fn later_glyphs_advance_along_the_pen() {
    let Some(font) = host_bold_font() else { return };
    let mut face = TextFace::new(&font, 72.0).unwrap();
    let glyphs = face.glyphs("HH");
    assert_eq!(glyphs.len(), 2);
    assert!(glyphs[1].x > glyphs[0].x);
    assert!(glyphs.iter().all(|g| g.y.abs() < 1e-3));
}

#[test]
fn face_shares_font_bytes_instead_of_copying() {
    let Some(font) = host_bold_font() else { return };
    let face = TextFace::new(&font, 72.0).unwrap();
    assert_eq!(face.font_data().data.data().as_ptr(), font.data.as_ptr());
    assert_eq!(face.font_data().index, font.index);
}
