use super::*;
use crate::geometry::lockup::LOCKUP;
use crate::layout::tracking::EstimatedMeasure;
use crate::render::svg::svg_title_start_x;
use crate::render::svg::svg_title_width;

#[test]
fn opts_default_and_validation() {
    let opts = RasterOpts::default();
    assert_eq!((opts.width, opts.height), (1920, 1400));
    assert_eq!(opts.surface_size().unwrap(), (1920, 1400));

    assert!(opts.with_size(0, 10).surface_size().is_err());
    assert!(opts.with_size(70_000, 10).surface_size().is_err());
}

#[test]
fn stroke_widths_round_and_clamp() {
    let scale = 2.0 * LOCKUP.mark_scale();
    assert_eq!(device_stroke_width(10.0, scale), 14.0);
    assert_eq!(device_stroke_width(8.0, scale), 11.0);
    assert_eq!(device_stroke_width(6.0, 2.0), 12.0);
    assert_eq!(device_stroke_width(8.0, 0.01), 1.0);
}

#[test]
fn font_sizes_follow_scale_with_floor() {
    let fit = DesignFit::for_canvas(1920, 1400).unwrap();
    assert_eq!(title_font_px(&LOCKUP, fit), 144.0);
    assert_eq!(subtitle_font_px(&LOCKUP, fit), 68.0);

    let tiny = DesignFit::for_canvas(96, 70).unwrap();
    assert_eq!(title_font_px(&LOCKUP, tiny), 12.0);
    assert_eq!(subtitle_font_px(&LOCKUP, tiny), 12.0);
}

#[test]
fn raster_and_vector_titles_share_the_design_center() {
    let vector_center = svg_title_start_x(&LOCKUP) + svg_title_width(&LOCKUP) / 2.0;
    assert!((vector_center - 480.0).abs() < 1e-9);

    for (w, h) in [(1920, 1400), (1000, 350), (333, 777), (960, 700)] {
        let fit = DesignFit::for_canvas(w, h).unwrap();
        let mut m = EstimatedMeasure {
            font_size: f64::from(title_font_px(&LOCKUP, fit)),
            glyph_factor: 0.58,
        };
        let line = raster_title_layout(&mut m, &LOCKUP, fit).unwrap();
        let design_center = (line.center_x() - fit.offset.x) / fit.scale;
        assert!((design_center - 480.0).abs() < 1e-6, "{w}x{h}: {design_center}");

        let sub = raster_subtitle_layout(&mut m, &LOCKUP, fit).unwrap();
        assert!((sub.center_x() - line.center_x()).abs() < 1e-6);
    }
}

#[test]
fn graphics_render_on_transparent_background() {
    let frame =
        render_lockup_frame(&MarkGeometry::build(), &LOCKUP, RasterOpts::default(), None).unwrap();
    assert_eq!(frame.width, 1920);
    assert_eq!(frame.height, 1400);
    assert_eq!(frame.data.len(), 1920 * 1400 * 4);
    assert!(frame.premultiplied);

    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(1919, 1399), Some([0, 0, 0, 0]));
    let covered = frame.covered_pixels();
    assert!(covered > 0);
    assert!(covered < 1920 * 1400 / 2);
}

#[test]
fn nodes_and_rules_land_where_the_design_puts_them() {
    let frame =
        render_lockup_frame(&MarkGeometry::build(), &LOCKUP, RasterOpts::default(), None).unwrap();

    // central node (246,164) in mark space -> (945.94, 298.63) on a 1920x1400 canvas
    assert_eq!(frame.pixel(945, 298), Some(WHITE.to_array()));
    // top rule at design y=432, middle of the span
    assert_eq!(frame.pixel(960, 864), Some(GOLD.to_array()));
    // rule end dot at design (86, 610)
    assert_eq!(frame.pixel(172, 1220), Some(GOLD.to_array()));
}

#[test]
fn graphics_are_left_right_balanced() {
    let frame =
        render_lockup_frame(&MarkGeometry::build(), &LOCKUP, RasterOpts::default(), None).unwrap();
    let (mut left, mut right) = (0usize, 0usize);
    for y in 0..frame.height {
        for x in 0..frame.width {
            if frame.pixel(x, y).is_some_and(|px| px[3] != 0) {
                if x < 960 {
                    left += 1;
                } else {
                    right += 1;
                }
            }
        }
    }
    let diff = left.abs_diff(right) as f64;
    assert!(diff / (left as f64) < 0.01, "left {left} right {right}");
}

#[test]
fn full_lockup_with_host_fonts() {
    let fonts = FontCandidates::default();
    if fonts.resolve(FontRole::Bold).is_err() {
        eprintln!("skipping: no font available on this host");
        return;
    }
    let geom = MarkGeometry::build();
    let opts = RasterOpts::default().with_size(960, 700);
    let frame = render_lockup(&geom, &LOCKUP, opts, &fonts).unwrap();
    assert_eq!((frame.width, frame.height), (960, 700));

    let graphics_only = render_lockup_frame(&geom, &LOCKUP, opts, None).unwrap();
    assert!(frame.covered_pixels() > graphics_only.covered_pixels());
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

/// Rows where `a` and `b` differ, top to bottom.
fn differing_rows(a: &FrameRGBA, b: &FrameRGBA) -> Vec<u32> {
    let row = (a.width * 4) as usize;
    a.data
        .chunks_exact(row)
        .zip(b.data.chunks_exact(row))
        .enumerate()
        .filter(|(_, (ra, rb))| ra != rb)
        .map(|(y, _)| y as u32)
        .collect()
}

#[test]
fn wordmark_sits_between_the_rules_on_its_baselines() {
    let fonts = FontCandidates::default();
    if fonts.resolve(FontRole::Bold).is_err() {
        eprintln!("skipping: no font available on this host");
        return;
    }
    let geom = MarkGeometry::build();
    let opts = RasterOpts::default();
    let fit = DesignFit::for_canvas(opts.width, opts.height).unwrap();
    let with_text = render_lockup(&geom, &LOCKUP, opts, &fonts).unwrap();
    let graphics_only = render_lockup_frame(&geom, &LOCKUP, opts, None).unwrap();

    let rows = differing_rows(&with_text, &graphics_only);
    assert!(!rows.is_empty());

    let dot = LOCKUP.rule_dot_radius * fit.scale;
    let top_rule = fit.map_y(LOCKUP.rule_ys[0]) + dot;
    let bottom_rule = fit.map_y(LOCKUP.rule_ys[1]) - dot;
    let (first, last) = (rows[0], rows[rows.len() - 1]);
    assert!(f64::from(first) > top_rule, "text ink starts at row {first}");
    assert!(f64::from(last) < bottom_rule, "text ink ends at row {last}");

    // All-caps lines: ink ends on the baseline, give or take overshoot.
    let title_baseline = fit.map_y(LOCKUP.title.baseline);
    let subtitle_baseline = fit.map_y(LOCKUP.subtitle.baseline);
    let gap = (title_baseline + subtitle_baseline) / 2.0;
    let title_bottom = rows
        .iter()
        .copied()
        .filter(|&y| f64::from(y) < gap)
        .max()
        .unwrap();
    assert!(
        (f64::from(title_bottom) - title_baseline).abs() <= 8.0,
        "title ink ends at row {title_bottom}, baseline {title_baseline}"
    );
    assert!((f64::from(last) - subtitle_baseline).abs() <= 8.0);
}
