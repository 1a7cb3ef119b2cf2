//! The circuit/brain mark in its 512×512 design space.
//!
//! Only the left half is authored. Everything on the right is produced by [`mirror_x`] across
//! [`AXIS_X`], so the mark is symmetric by construction.

use serde::Serialize;

use crate::foundation::core::Point;
use crate::foundation::error::{BrandError, BrandResult};
use crate::foundation::math::{mirror_x, sample_quadratic};

/// Side length of the square mark design space.
pub const DESIGN_SIZE: f64 = 512.0;
/// Vertical symmetry axis.
pub const AXIS_X: f64 = DESIGN_SIZE / 2.0;
/// Stroke width of both silhouette halves.
pub const OUTLINE_WIDTH: f64 = 10.0;
pub const CENTRAL_NODE_RADIUS: f64 = 7.0;
pub const LINE_NODE_RADIUS: f64 = 6.0;

/// An internal trace: a left-half polyline with node markers at some of its vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CircuitLine {
    pub points: &'static [Point],
    /// Indices into `points` that receive a filled node circle.
    pub nodes: &'static [usize],
    pub width: f64,
}

impl CircuitLine {
    /// The right-half counterpart of this trace.
    pub fn mirrored(&self) -> Vec<Point> {
        self.points.iter().map(|&p| mirror_x(p, AXIS_X)).collect()
    }

    /// Node positions on the left half, in node order.
    pub fn node_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().filter_map(|&i| self.points.get(i).copied())
    }

    fn validate(&self, idx: usize) -> BrandResult<()> {
        if self.points.len() < 2 {
            return Err(BrandError::validation(format!(
                "circuit line {idx} has {} point(s), need at least 2",
                self.points.len()
            )));
        }
        if let Some(&bad) = self.nodes.iter().find(|&&n| n >= self.points.len()) {
            return Err(BrandError::validation(format!(
                "circuit line {idx} node index {bad} out of range (len {})",
                self.points.len()
            )));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(BrandError::validation(format!(
                "circuit line {idx} stroke width must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// A straight vertical stem beside the axis, drawn with an explicit width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StemSegment {
    pub from: Point,
    pub to: Point,
    pub width: f64,
}

#[derive(Clone, Copy, Debug)]
enum OutlineStep {
    Points(&'static [Point]),
    Quad {
        from: Point,
        ctrl: Point,
        to: Point,
        steps: usize,
    },
}

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

const fn quad(from: Point, ctrl: Point, to: Point, steps: usize) -> OutlineStep {
    OutlineStep::Quad {
        from,
        ctrl,
        to,
        steps,
    }
}

const OUTLINE_RECIPE: &[OutlineStep] = &[
    OutlineStep::Points(&[p(252., 52.), p(220., 52.), p(196., 76.), p(196., 128.), p(164., 128.)]),
    quad(p(164., 128.), p(132., 130.), p(112., 154.), 10),
    OutlineStep::Points(&[p(100., 168.), p(100., 204.), p(72., 204.)]),
    quad(p(72., 204.), p(36., 206.), p(26., 238.), 12),
    quad(p(26., 238.), p(14., 264.), p(28., 286.), 10),
    OutlineStep::Points(&[p(42., 300.)]),
    quad(p(42., 300.), p(18., 316.), p(20., 348.), 12),
    quad(p(20., 348.), p(20., 390.), p(56., 408.), 12),
    OutlineStep::Points(&[p(64., 412.), p(64., 430.)]),
    quad(p(64., 430.), p(66., 468.), p(104., 482.), 14),
    OutlineStep::Points(&[
        p(144., 482.),
        p(172., 454.),
        p(172., 408.),
        p(196., 384.),
        p(196., 344.),
        p(224., 316.),
        p(224., 286.),
    ]),
    OutlineStep::Points(&[
        p(252., 258.),
        p(252., 194.),
        p(228., 170.),
        p(228., 142.),
        p(196., 110.),
        p(196., 82.),
        p(220., 58.),
        p(252., 58.),
    ]),
];

const fn line(points: &'static [Point], nodes: &'static [usize], width: f64) -> CircuitLine {
    CircuitLine {
        points,
        nodes,
        width,
    }
}

const CIRCUIT_LINES: &[CircuitLine] = &[
    line(&[p(150., 92.), p(150., 120.), p(186., 156.), p(186., 192.)], &[0, 3], 8.),
    line(
        &[p(128., 100.), p(128., 150.), p(172., 194.), p(172., 250.), p(218., 296.)],
        &[0, 4],
        8.,
    ),
    line(&[p(106., 146.), p(106., 188.), p(146., 228.), p(146., 252.)], &[0, 2, 3], 8.),
    line(&[p(86., 182.), p(86., 222.), p(124., 260.), p(200., 260.)], &[0, 1, 3], 8.),
    line(&[p(62., 222.), p(88., 248.), p(118., 248.)], &[0, 1, 2], 8.),
    line(&[p(56., 284.), p(84., 312.), p(126., 312.)], &[0, 1, 2], 8.),
    line(&[p(74., 330.), p(74., 360.), p(110., 360.)], &[0, 2], 8.),
    line(&[p(82., 388.), p(82., 434.)], &[0, 1], 8.),
    line(&[p(118., 350.), p(118., 408.), p(118., 440.)], &[0, 2], 8.),
    line(&[p(146., 396.), p(146., 460.)], &[0, 1], 8.),
    line(&[p(172., 390.), p(172., 430.), p(198., 456.)], &[0, 1, 2], 8.),
    line(&[p(210., 158.), p(210., 230.), p(236., 256.)], &[0, 2], 8.),
    line(&[p(210., 272.), p(236., 272.)], &[0, 1], 8.),
    line(&[p(210., 340.), p(210., 470.)], &[0, 1], 8.),
    line(&[p(232., 118.), p(232., 470.)], &[0, 1], 10.),
];

/// Long stems first (width 10), then the short upper stems (width 8).
pub const STEMS: [StemSegment; 4] = [
    StemSegment {
        from: p(246., 156.),
        to: p(246., 470.),
        width: 10.,
    },
    StemSegment {
        from: p(266., 156.),
        to: p(266., 470.),
        width: 10.,
    },
    StemSegment {
        from: p(246., 104.),
        to: p(246., 140.),
        width: 8.,
    },
    StemSegment {
        from: p(266., 104.),
        to: p(266., 140.),
        width: 8.,
    },
];

pub const CENTRAL_NODES: [Point; 6] = [
    p(246., 164.),
    p(266., 164.),
    p(246., 248.),
    p(266., 248.),
    p(246., 362.),
    p(266., 362.),
];

/// The left silhouette half as an open polyline, curves expanded into samples.
pub fn build_outline_half() -> Vec<Point> {
    let mut out = Vec::with_capacity(128);
    for step in OUTLINE_RECIPE {
        match *step {
            OutlineStep::Points(pts) => out.extend_from_slice(pts),
            OutlineStep::Quad {
                from,
                ctrl,
                to,
                steps,
            } => out.extend(sample_quadratic(from, ctrl, to, steps)),
        }
    }
    out
}

/// The left-half circuit traces.
pub fn build_circuit_lines() -> &'static [CircuitLine] {
    CIRCUIT_LINES
}

/// One stroked polyline of the mark, in draw order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkStroke {
    pub points: Vec<Point>,
    pub width: f64,
}

/// One filled node circle of the mark, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarkNode {
    pub center: Point,
    pub radius: f64,
}

/// The full mark, both halves expanded. Both emitters walk this same model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkGeometry {
    pub outline_left: Vec<Point>,
    pub outline_right: Vec<Point>,
    pub stems: [StemSegment; 4],
    pub lines: &'static [CircuitLine],
    pub central_nodes: [Point; 6],
}

impl MarkGeometry {
    pub fn build() -> Self {
        let outline_left = build_outline_half();
        let outline_right = outline_left.iter().map(|&p| mirror_x(p, AXIS_X)).collect();
        Self {
            outline_left,
            outline_right,
            stems: STEMS,
            lines: build_circuit_lines(),
            central_nodes: CENTRAL_NODES,
        }
    }

    /// Check the structural invariants of the constant tables.
    pub fn validate(&self) -> BrandResult<()> {
        if self.outline_left.len() < 2 {
            return Err(BrandError::validation("outline needs at least 2 points"));
        }
        for (i, l) in self.lines.iter().enumerate() {
            l.validate(i)?;
        }
        Ok(())
    }

    /// Every stroke in draw order: outline pair, stems, then each trace followed by its mirror.
    pub fn strokes(&self) -> Vec<MarkStroke> {
        let mut out = Vec::with_capacity(2 + self.stems.len() + 2 * self.lines.len());
        out.push(MarkStroke {
            points: self.outline_left.clone(),
            width: OUTLINE_WIDTH,
        });
        out.push(MarkStroke {
            points: self.outline_right.clone(),
            width: OUTLINE_WIDTH,
        });
        for s in &self.stems {
            out.push(MarkStroke {
                points: vec![s.from, s.to],
                width: s.width,
            });
        }
        for l in self.lines {
            out.push(MarkStroke {
                points: l.points.to_vec(),
                width: l.width,
            });
            out.push(MarkStroke {
                points: l.mirrored(),
                width: l.width,
            });
        }
        out
    }

    /// Every node circle in draw order: central nodes, then each trace node and its mirror.
    pub fn nodes(&self) -> Vec<MarkNode> {
        let mut out: Vec<MarkNode> = self
            .central_nodes
            .iter()
            .map(|&center| MarkNode {
                center,
                radius: CENTRAL_NODE_RADIUS,
            })
            .collect();
        for l in self.lines {
            for center in l.node_points() {
                out.push(MarkNode {
                    center,
                    radius: LINE_NODE_RADIUS,
                });
                out.push(MarkNode {
                    center: mirror_x(center, AXIS_X),
                    radius: LINE_NODE_RADIUS,
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mark.rs"]
mod tests;
