use super::*;

#[test]
fn builders_are_deterministic() {
    assert_eq!(build_outline_half(), build_outline_half());
    assert_eq!(build_circuit_lines(), build_circuit_lines());
    assert_eq!(MarkGeometry::build(), MarkGeometry::build());
}

#[test]
fn outline_keeps_recipe_endpoints() {
    let outline = build_outline_half();
    assert_eq!(outline.len(), 96);
    assert_eq!(outline[0], Point::new(252.0, 52.0));
    assert_eq!(outline[4], Point::new(164.0, 128.0));
    // last sample of the first curve lands exactly on its end point
    assert_eq!(outline[14], Point::new(112.0, 154.0));
    assert_eq!(*outline.last().unwrap(), Point::new(252.0, 58.0));
}

#[test]
fn right_half_is_exact_mirror_of_left() {
    let g = MarkGeometry::build();
    assert_eq!(g.outline_left.len(), g.outline_right.len());
    for (l, r) in g.outline_left.iter().zip(&g.outline_right) {
        assert_eq!(*r, mirror_x(*l, AXIS_X));
        assert_eq!(mirror_x(*r, AXIS_X), *l);
    }
    for line in g.lines {
        let m = line.mirrored();
        for (l, r) in line.points.iter().zip(&m) {
            assert_eq!(*r, mirror_x(*l, 256.0));
        }
    }
}

#[test]
fn node_indices_are_in_range() {
    let g = MarkGeometry::build();
    g.validate().unwrap();
    for line in build_circuit_lines() {
        assert!(line.points.len() >= 2);
        for &n in line.nodes {
            assert!(n < line.points.len());
        }
    }
}

#[test]
fn validate_rejects_out_of_range_node() {
    static BAD: [CircuitLine; 1] = [CircuitLine {
        points: &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        nodes: &[0, 2],
        width: 8.0,
    }];
    let mut g = MarkGeometry::build();
    g.lines = &BAD;
    let err = g.validate().unwrap_err();
    assert!(err.to_string().contains("node index 2"));
}

#[test]
fn stem_widths_are_explicit() {
    let widths: Vec<f64> = STEMS.iter().map(|s| s.width).collect();
    assert_eq!(widths, vec![10.0, 10.0, 8.0, 8.0]);
    assert_eq!(STEMS[1].from, mirror_x(STEMS[0].from, AXIS_X));
    assert_eq!(STEMS[3].to, mirror_x(STEMS[2].to, AXIS_X));
}

#[test]
fn draw_lists_cover_every_line_and_node() {
    let g = MarkGeometry::build();
    let strokes = g.strokes();
    assert_eq!(strokes.len(), 2 + 4 + 2 * g.lines.len());
    assert_eq!(strokes[0].width, OUTLINE_WIDTH);

    let node_count: usize = g.lines.iter().map(|l| l.nodes.len()).sum();
    let nodes = g.nodes();
    assert_eq!(nodes.len(), 6 + 2 * node_count);
    assert!(nodes[..6].iter().all(|n| n.radius == CENTRAL_NODE_RADIUS));
    assert!(nodes[6..].iter().all(|n| n.radius == LINE_NODE_RADIUS));
}
