use super::*;
use crate::foundation::core::WHITE;
use crate::geometry::mark::MarkGeometry;
use crate::render::svg::mark_svg;

#[test]
fn mark_icon_has_requested_size_and_transparent_corners() {
    let icon = rasterize_mark_icon(&mark_svg(&MarkGeometry::build()), 128).unwrap();
    assert_eq!((icon.width, icon.height), (128, 128));
    assert_eq!(icon.data.len(), 128 * 128 * 4);
    assert_eq!(icon.pixel(0, 0), Some([0, 0, 0, 0]));
    assert!(icon.covered_pixels() > 0);
}

#[test]
fn mark_icon_hits_a_central_node() {
    let icon = rasterize_mark_icon(&mark_svg(&MarkGeometry::build()), 512).unwrap();
    // central node at (246,164), radius 7
    assert_eq!(icon.pixel(246, 164), Some(WHITE.to_array()));
}

#[test]
fn icon_size_is_bounded() {
    let svg = mark_svg(&MarkGeometry::build());
    assert!(rasterize_mark_icon(&svg, 0).is_err());
    assert!(rasterize_mark_icon(&svg, MAX_ICON_PX + 1).is_err());
}

#[test]
fn invalid_markup_is_a_render_error() {
    assert!(matches!(parse_svg("<nope"), Err(BrandError::Render(_))));
}
