use crate::foundation::core::Point;

/// Reflect `p` across the vertical line `x = axis_x`.
pub fn mirror_x(p: Point, axis_x: f64) -> Point {
    Point::new(2.0 * axis_x - p.x, p.y)
}

/// Sample the quadratic Bézier `p0 -> p2` (control `c`) at `t = i / steps` for `i in 1..=steps`.
///
/// `t = 0` is skipped because the caller already owns `p0` as the tail of its polyline; the last
/// sample is exactly `p2`. Samples are snapped to [`SAMPLE_GRID`] so that mirroring them stays
/// exact.
pub fn sample_quadratic(p0: Point, c: Point, p2: Point, steps: usize) -> Vec<Point> {
    (1..=steps)
        .map(|i| {
            if i == steps {
                return p2;
            }
            let t = i as f64 / steps as f64;
            let u = 1.0 - t;
            let (w0, w1, w2) = (u * u, 2.0 * u * t, t * t);
            Point::new(
                snap_to_grid(w0 * p0.x + w1 * c.x + w2 * p2.x),
                snap_to_grid(w0 * p0.y + w1 * c.y + w2 * p2.y),
            )
        })
        .collect()
}

/// Sample coordinates are multiples of `1 / SAMPLE_GRID`.
///
/// Grid values below 2^37 make `2 * axis - x` exact for any axis on the grid, so
/// `mirror_x(mirror_x(p, a), a) == p` holds bit for bit.
pub const SAMPLE_GRID: f64 = 65536.0;

/// Round `v` to the nearest multiple of `1 / SAMPLE_GRID`.
pub fn snap_to_grid(v: f64) -> f64 {
    (v * SAMPLE_GRID).round() / SAMPLE_GRID
}

/// Round a device-space length to whole pixels, ties to even.
pub fn round_px(v: f64) -> f64 {
    v.round_ties_even()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
