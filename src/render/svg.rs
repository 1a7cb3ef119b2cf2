//! Vector emitter: serializes the mark and the full lockup as SVG markup.

use crate::foundation::core::{GOLD, MUTED_WHITE, Point, WHITE};
use crate::geometry::lockup::{
    FONT_FAMILY, LOCKUP_HEIGHT, LOCKUP_WIDTH, LockupLayout, SUBTITLE, TITLE_SEGMENTS,
};
use crate::geometry::mark::{
    CENTRAL_NODE_RADIUS, DESIGN_SIZE, LINE_NODE_RADIUS, MarkGeometry, OUTLINE_WIDTH,
};
use crate::layout::tracking::EstimatedMeasure;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn polyline(points: &[Point], width: f64) -> String {
    format!(
        r#"<polyline points="{}" stroke-width="{width}"/>"#,
        points_attr(points)
    )
}

fn line(a: Point, b: Point) -> String {
    format!(r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#, a.x, a.y, b.x, b.y)
}

fn circle(c: Point, r: f64) -> String {
    format!(r#"<circle cx="{}" cy="{}" r="{r}"/>"#, c.x, c.y)
}

/// Drawable content of the mark (everything inside the root element).
pub fn mark_body(geom: &MarkGeometry) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(128);
    parts.push(format!(
        r#"<g stroke="{}" stroke-linecap="round" stroke-linejoin="round" shape-rendering="geometricPrecision">"#,
        WHITE.to_hex()
    ));
    parts.push(polyline(&geom.outline_left, OUTLINE_WIDTH));
    parts.push(polyline(&geom.outline_right, OUTLINE_WIDTH));
    for s in &geom.stems {
        parts.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}"/>"#,
            s.from.x, s.from.y, s.to.x, s.to.y, s.width
        ));
    }
    for l in geom.lines {
        parts.push(polyline(l.points, l.width));
        parts.push(polyline(&l.mirrored(), l.width));
    }
    parts.push("</g>".to_owned());

    parts.push(format!(r#"<g fill="{}">"#, WHITE.to_hex()));
    for &c in &geom.central_nodes {
        parts.push(circle(c, CENTRAL_NODE_RADIUS));
    }
    for n in geom.nodes().iter().skip(geom.central_nodes.len()) {
        parts.push(circle(n.center, LINE_NODE_RADIUS));
    }
    parts.push("</g>".to_owned());
    parts.concat()
}

/// The standalone mark in a 512×512 viewport.
#[tracing::instrument(level = "debug", skip(geom))]
pub fn mark_svg(geom: &MarkGeometry) -> String {
    format!(
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {DESIGN_SIZE} {DESIGN_SIZE}" fill="none">{}</svg>"#,
        mark_body(geom)
    )
}

/// Estimated title width (glyph factor, letter-spacing across all segments).
pub fn svg_title_width(layout: &LockupLayout) -> f64 {
    let text: String = TITLE_SEGMENTS.iter().map(|s| s.text).collect();
    let measure = EstimatedMeasure {
        font_size: layout.title.font_size,
        glyph_factor: layout.glyph_factor,
    };
    measure.line_width(&text, layout.title.letter_spacing)
}

/// Left x of the title `<text>` element.
pub fn svg_title_start_x(layout: &LockupLayout) -> f64 {
    layout.center_x - svg_title_width(layout) / 2.0
}

fn title_text(layout: &LockupLayout) -> String {
    let t = &layout.title;
    let mut out = format!(
        r#"<text xml:space="preserve" x="{:.1}" y="{:.1}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}" letter-spacing="{}" fill="{}">"#,
        svg_title_start_x(layout),
        t.baseline,
        t.font_size,
        t.font_weight,
        t.letter_spacing,
        WHITE.to_hex()
    );
    for s in &TITLE_SEGMENTS {
        out.push_str(&format!(
            r#"<tspan fill="{}">{}</tspan>"#,
            s.color.to_hex(),
            escape_text(s.text)
        ));
    }
    out.push_str("</text>");
    out
}

fn subtitle_text(layout: &LockupLayout) -> String {
    let t = &layout.subtitle;
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}" letter-spacing="{}" fill="{}">{}</text>"#,
        layout.center_x,
        t.baseline,
        t.font_size,
        t.font_weight,
        t.letter_spacing,
        MUTED_WHITE.to_hex(),
        escape_text(SUBTITLE)
    )
}

/// The full lockup in a 960×700 viewport: scaled mark, gold rules with corner dots, title and
/// subtitle.
#[tracing::instrument(level = "debug", skip(geom, layout))]
pub fn lockup_svg(geom: &MarkGeometry, layout: &LockupLayout) -> String {
    let origin = layout.mark_origin();
    let gold = GOLD.to_hex();
    let corners = layout.rule_corners();

    let mut parts: Vec<String> = vec![
        format!(r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {LOCKUP_WIDTH} {LOCKUP_HEIGHT}" fill="none">"#),
        format!(
            r#"<g transform="translate({:.1} {:.1}) scale({:.6})">"#,
            origin.x,
            origin.y,
            layout.mark_scale()
        ),
        mark_body(geom),
        "</g>".to_owned(),
        format!(
            r#"<g stroke="{gold}" stroke-width="{}" stroke-linecap="round" shape-rendering="geometricPrecision">"#,
            layout.rule_stroke
        ),
        line(corners[0], corners[1]),
        line(corners[2], corners[3]),
        "</g>".to_owned(),
        format!(r#"<g fill="{gold}">"#),
    ];
    for c in corners {
        parts.push(circle(c, layout.rule_dot_radius));
    }
    parts.push("</g>".to_owned());
    parts.push(title_text(layout));
    parts.push(subtitle_text(layout));
    parts.push("</svg>".to_owned());
    parts.concat()
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
