//! Blob shapes: a randomized closed loop of cubic bezier segments.
//!
//! Every blob starts from the same seven-point unit-circle template. Each
//! template vertex is displaced as a rigid unit (its main point and both
//! control points move by one shared random vector), which roughens the
//! outline while keeping it locally smooth. The displaced loop is emitted to a
//! [`PaintSurface`] inside a translated and uniformly scaled frame.
use glam::DVec2;

use crate::rng::SeededRandom;
use crate::surface::PaintSurface;

/// Number of vertices in the closed template loop.
pub const CURVE_POINTS: usize = 7;

/// Maximum radial displacement per vertex, relative to the unit circle.
pub const MAX_POINT_DISTANCE: f64 = 0.5;

/// One vertex of the closed loop: the on-curve point with its incoming and
/// outgoing cubic control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Control point of the segment arriving at `point`.
    pub cp_in: DVec2,
    /// The on-curve point.
    pub point: DVec2,
    /// Control point of the segment leaving `point`.
    pub cp_out: DVec2,
}

impl CurvePoint {
    const fn new(cp_in: DVec2, point: DVec2, cp_out: DVec2) -> Self {
        Self {
            cp_in,
            point,
            cp_out,
        }
    }
}

/// Bezier control points for a seven-point circle, to 3 decimal places.
///
/// Control distance for an n-point cubic circle is `(4 / 3) * tan(pi / 2n)`;
/// the rows are that tangent frame rotated by `360 / 7` degrees per vertex.
pub const UNIT_CIRCLE: [CurvePoint; CURVE_POINTS] = [
    CurvePoint::new(
        DVec2::new(-0.304, -1.0),
        DVec2::new(0.0, -1.0),
        DVec2::new(0.304, -1.0),
    ),
    CurvePoint::new(
        DVec2::new(0.592, -0.861),
        DVec2::new(0.782, -0.623),
        DVec2::new(0.972, -0.386),
    ),
    CurvePoint::new(
        DVec2::new(1.043, -0.074),
        DVec2::new(0.975, 0.223),
        DVec2::new(0.907, 0.519),
    ),
    CurvePoint::new(
        DVec2::new(0.708, 0.769),
        DVec2::new(0.434, 0.901),
        DVec2::new(0.16, 1.033),
    ),
    CurvePoint::new(
        DVec2::new(-0.16, 1.033),
        DVec2::new(-0.434, 0.901),
        DVec2::new(-0.708, 0.769),
    ),
    CurvePoint::new(
        DVec2::new(-0.907, 0.519),
        DVec2::new(-0.975, 0.223),
        DVec2::new(-1.043, -0.074),
    ),
    CurvePoint::new(
        DVec2::new(-0.972, -0.386),
        DVec2::new(-0.782, -0.623),
        DVec2::new(-0.592, -0.861),
    ),
];

/// Displace a template vertex by one random vector.
///
/// Consumes exactly two draws, distance then angle, and applies the same shift
/// to all three coordinate pairs. No clamping: a vertex may land outside the
/// unit circle, the shape is a fuzzy circle rather than a guaranteed-convex
/// one.
pub fn randomize_point(point: &CurvePoint, rng: &mut SeededRandom) -> CurvePoint {
    let distance = rng.next() * MAX_POINT_DISTANCE;
    let angle = rng.next() * std::f64::consts::TAU;
    let shift = DVec2::new(angle.sin() * distance, angle.cos() * distance);
    CurvePoint {
        cp_in: point.cp_in + shift,
        point: point.point + shift,
        cp_out: point.cp_out + shift,
    }
}

/// Emit the closed loop as a path: move to the first on-curve point, then one
/// cubic segment per vertex, wrapping back to the start.
pub fn emit_path(surface: &mut dyn PaintSurface, points: &[CurvePoint; CURVE_POINTS]) {
    surface.begin_path();
    surface.move_to(points[0].point.x, points[0].point.y);
    for i in 0..points.len() {
        let next = (i + 1) % points.len();
        surface.cubic_to(
            points[i].cp_out.x,
            points[i].cp_out.y,
            points[next].cp_in.x,
            points[next].cp_in.y,
            points[next].point.x,
            points[next].point.y,
        );
    }
    surface.close_path();
}

/// Placement and style for one blob.
#[derive(Debug)]
pub struct BlobParams<'a> {
    /// Stream feeding the per-vertex randomization; advanced by 14 draws.
    pub rng: &'a mut SeededRandom,
    /// Center of the blob on the surface.
    pub position: DVec2,
    /// Uniform scale applied to the unit-circle template.
    pub size: f64,
    /// Fill color handed through to the surface.
    pub color: &'a str,
}

/// Randomize the template and fill it at the given position and size.
///
/// The vertices are randomized in template order, two draws each. The
/// surface's transform is saved before the translate/scale and restored after
/// the fill, so consecutive blobs never see each other's frames.
pub fn draw_blob(surface: &mut dyn PaintSurface, params: BlobParams<'_>) {
    let mut points = UNIT_CIRCLE;
    for point in &mut points {
        *point = randomize_point(point, params.rng);
    }

    surface.save();
    surface.translate(params.position.x, params.position.y);
    surface.scale(params.size);
    emit_path(surface, &points);
    surface.fill(params.color);
    surface.restore();
}
