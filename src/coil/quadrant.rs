use std::f64::consts::FRAC_PI_8;
use std::ops::Range;

use tracing::debug;

use crate::error::Result;
use crate::layout::{LayerRef, TracePolygon};
use crate::math::octagon::{self, POSITIONS_PER_TURN};
use crate::math::Point2;

use super::{CoilParameters, CoilWinding};

/// Quadrants per turn; one quadrant spans two octagon sides.
const QUADRANTS_PER_TURN: usize = 4;

/// Vertex positions spanned by one quadrant.
const POSITIONS_PER_QUADRANT: usize = POSITIONS_PER_TURN / QUADRANTS_PER_TURN;

/// Builds one coil winding quadrant-by-quadrant, straight from the
/// octagon vertex model with no iterative stepping.
///
/// Supports radial interleaving of several coils (a transformer is two
/// interleaved instances) and a half-turn terminal gap for the
/// opposite-side-entry secondary.
///
/// Each quadrant becomes one strip polygon: 5 vertex positions along
/// the turn's inner octagon walked forward, then the same 5 positions
/// on the outer octagon walked back. The outer octagon sits
/// `trace_width` further out at side midpoints and
/// `trace_width / cos(π/8)` at corners, which keeps the strip's
/// perpendicular width constant across both vertex kinds.
#[derive(Debug)]
pub struct QuadrantCoil {
    params: CoilParameters,
    coil_index: usize,
    coil_count: usize,
    opposite_side_entry: bool,
    layer: LayerRef,
}

impl QuadrantCoil {
    /// Creates a builder for coil `coil_index` of `coil_count` radially
    /// interleaved coils.
    #[must_use]
    pub fn new(
        params: CoilParameters,
        coil_index: usize,
        coil_count: usize,
        opposite_side_entry: bool,
        layer: LayerRef,
    ) -> Self {
        debug_assert!(coil_index < coil_count);
        Self {
            params,
            coil_index,
            coil_count,
            opposite_side_entry,
            layer,
        }
    }

    /// Executes the builder, producing one strip polygon per quadrant
    /// per turn.
    ///
    /// # Errors
    ///
    /// Currently infallible for validated [`CoilParameters`]; the
    /// `Result` mirrors the other builders so callers treat every
    /// geometry source uniformly.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<CoilWinding> {
        let pitch = self.params.pitch();
        let mut segments = Vec::new();
        for turn in 0..self.params.num_turns() {
            let nominal_radius = self.params.inner_radius()
                + (self.coil_count * turn + self.coil_index) as f64 * pitch;
            for quadrant in self.quadrant_range(turn) {
                segments.push(self.quadrant_strip(nominal_radius, quadrant));
            }
        }

        debug!(
            coil_index = self.coil_index,
            num_turns = self.params.num_turns(),
            segments = segments.len(),
            "built quadrant winding"
        );
        Ok(CoilWinding::new(segments))
    }

    /// Quadrants drawn for `turn`.
    ///
    /// The first and last turn of an opposite-side-entry secondary are
    /// clipped to half a turn each, leaving a 180°-rotated gap where the
    /// terminal leads land.
    fn quadrant_range(&self, turn: usize) -> Range<usize> {
        if self.opposite_side_entry && self.coil_index == 1 {
            if turn == 0 {
                return 0..2;
            }
            if turn + 1 == self.params.num_turns() {
                return 2..4;
            }
        }
        0..QUADRANTS_PER_TURN
    }

    /// Quadrant in which this coil's winding steps outward to connect
    /// to its next turn.
    fn jump_quadrant(&self) -> usize {
        if self.opposite_side_entry && self.coil_index == 1 {
            1
        } else {
            3
        }
    }

    /// Vertex-position shift mirroring the opposite-side secondary to
    /// the far side of the origin.
    fn position_shift(&self) -> usize {
        if self.opposite_side_entry && self.coil_index == 1 {
            POSITIONS_PER_TURN / 2
        } else {
            0
        }
    }

    /// Builds the strip polygon for one quadrant of one turn.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    fn quadrant_strip(&self, nominal_radius: f64, quadrant: usize) -> TracePolygon {
        let trace_width = self.params.trace_width();
        // Radial advance of this coil per turn; the jump stretches one
        // quadrant's y-radius by exactly this much so the closing vertex
        // lands on the next turn's octagon.
        let jump_stretch = self.coil_count as f64 * self.params.pitch();
        let first = quadrant * POSITIONS_PER_QUADRANT;

        let mut points = Vec::with_capacity(2 * (POSITIONS_PER_QUADRANT + 1));
        for outer in [false, true] {
            for k in 0..=POSITIONS_PER_QUADRANT {
                let position = if outer {
                    first + POSITIONS_PER_QUADRANT - k
                } else {
                    first + k
                };
                let shifted = position + self.position_shift();
                let vertex = octagon::vertex_angle(shifted as i64);

                let mut radius = vertex.scaled_radius(nominal_radius);
                if outer {
                    radius += vertex.radial_width_offset(trace_width);
                }

                let mut radius_y = radius;
                if quadrant == self.jump_quadrant() {
                    radius_y += if shifted == POSITIONS_PER_TURN {
                        jump_stretch * FRAC_PI_8.cos()
                    } else {
                        jump_stretch
                    };
                }

                points.push(Point2::new(
                    radius * vertex.angle().cos(),
                    radius_y * vertex.angle().sin(),
                ));
            }
        }
        TracePolygon::new(points, self.layer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Vector2, TOLERANCE};

    fn params(num_turns: usize) -> CoilParameters {
        CoilParameters::new(3.0, 20.0, num_turns, 5.0).unwrap()
    }

    fn layer() -> LayerRef {
        LayerRef::new(37, 0)
    }

    /// Checks that `b` lies on the segment from `a` to `c`.
    fn assert_collinear(a: Point2, b: Point2, c: Point2, context: &str) {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.x * ac.y - ab.y * ac.x;
        assert!(cross.abs() < 1e-6, "{context}: cross = {cross}");
    }

    #[test]
    fn four_segments_per_full_turn() {
        let winding = QuadrantCoil::new(params(3), 0, 1, false, layer())
            .execute()
            .unwrap();
        assert_eq!(winding.len(), 12);
        for segment in winding.segments() {
            assert_eq!(segment.points().len(), 10);
        }
    }

    #[test]
    fn single_turn_single_coil() {
        let winding = QuadrantCoil::new(params(1), 0, 1, false, layer())
            .execute()
            .unwrap();
        assert_eq!(winding.len(), 4);
    }

    #[test]
    fn single_turn_interleaved_pair() {
        for coil_index in 0..2 {
            let winding = QuadrantCoil::new(params(1), coil_index, 2, false, layer())
                .execute()
                .unwrap();
            assert_eq!(winding.len(), 4, "coil {coil_index}");
        }
    }

    #[test]
    fn opposite_side_secondary_has_half_turn_gaps() {
        let winding = QuadrantCoil::new(params(3), 1, 2, true, layer())
            .execute()
            .unwrap();
        // First turn quadrants {0,1}, last turn {2,3}, full turns between.
        assert_eq!(winding.len(), 2 + 2 + 4);
    }

    #[test]
    fn opposite_side_secondary_single_turn_keeps_entry_half() {
        // With one turn the entry and exit clips collide; the entry
        // half wins.
        let winding = QuadrantCoil::new(params(1), 1, 2, true, layer())
            .execute()
            .unwrap();
        assert_eq!(winding.len(), 2);
    }

    #[test]
    fn opposite_side_secondary_two_turns() {
        let winding = QuadrantCoil::new(params(2), 1, 2, true, layer())
            .execute()
            .unwrap();
        assert_eq!(winding.len(), 2 + 2);
    }

    #[test]
    fn consecutive_quadrants_share_an_edge() {
        // Inner chains forward through points[0..=4], outer returns
        // through points[5..=9]; adjacent strips must touch exactly.
        let winding = QuadrantCoil::new(params(3), 0, 2, false, layer())
            .execute()
            .unwrap();
        for (i, pair) in winding.segments().windows(2).enumerate() {
            let prev = pair[0].points();
            let next = pair[1].points();
            assert!((next[0] - prev[4]).norm() < TOLERANCE, "inner chain at {i}");
            assert!((next[9] - prev[5]).norm() < TOLERANCE, "outer chain at {i}");
        }
    }

    #[test]
    fn single_coil_turns_connect_across_the_jump() {
        let winding = QuadrantCoil::new(params(2), 0, 1, false, layer())
            .execute()
            .unwrap();
        for (i, pair) in winding.segments().windows(2).enumerate() {
            let prev = pair[0].points();
            let next = pair[1].points();
            assert!((next[0] - prev[4]).norm() < TOLERANCE, "inner chain at {i}");
            assert!((next[9] - prev[5]).norm() < TOLERANCE, "outer chain at {i}");
        }
    }

    #[test]
    fn opposite_side_gap_reconnects_at_the_top() {
        // The secondary's half first turn ends where its second turn
        // passes the top of the octagon: the jump must land exactly on
        // the next turn's inner octagon.
        let winding = QuadrantCoil::new(params(3), 1, 2, true, layer())
            .execute()
            .unwrap();
        let first_turn_end = winding.segments()[1].points();
        // Second turn is segments[2..6]; its quadrant 2 starts at the
        // shifted top position.
        let second_turn_quad2 = winding.segments()[4].points();
        assert!((second_turn_quad2[0] - first_turn_end[4]).norm() < TOLERANCE);
        assert!((second_turn_quad2[9] - first_turn_end[5]).norm() < TOLERANCE);
    }

    #[test]
    fn octagon_sides_are_flat() {
        // A quadrant starts and ends on side midpoints, so the one full
        // octagon side it contains is the corner/midpoint/corner run in
        // the middle; that run must be collinear on both boundaries
        // (outside the jump quadrant, which ramps on purpose). The
        // half-sides at the quadrant's ends continue into the
        // neighboring strip.
        let winding = QuadrantCoil::new(params(2), 0, 1, false, layer())
            .execute()
            .unwrap();
        for (i, segment) in winding.segments().iter().enumerate() {
            if i % QUADRANTS_PER_TURN == 3 {
                continue;
            }
            let p = segment.points();
            assert_collinear(p[1], p[2], p[3], "inner side");
            assert_collinear(p[6], p[7], p[8], "outer side");
        }
        // Half-sides join flat across a quadrant boundary.
        let a = winding.segments()[0].points();
        let b = winding.segments()[1].points();
        assert_collinear(a[3], a[4], b[1], "inner boundary side");
        assert_collinear(a[6], a[5], b[8], "outer boundary side");
    }

    #[test]
    fn perpendicular_width_equals_trace_width() {
        // Distance between the parallel inner and outer side lines.
        let winding = QuadrantCoil::new(params(2), 0, 2, false, layer())
            .execute()
            .unwrap();
        for (i, segment) in winding.segments().iter().enumerate() {
            if i % QUADRANTS_PER_TURN == 3 {
                continue;
            }
            let p = segment.points();
            // The quadrant's full octagon side: inner p[1]->p[3],
            // outer p[8]->p[6].
            let along = Vector2::new(p[3].x - p[1].x, p[3].y - p[1].y).normalize();
            let normal = Vector2::new(-along.y, along.x);
            let width = (p[8] - p[1]).dot(&normal).abs();
            assert!(
                (width - 3.0).abs() < TOLERANCE,
                "segment {i}: width = {width}"
            );
        }
    }

    #[test]
    fn jump_is_confined_to_its_quadrant() {
        let p = params(1);
        let winding = QuadrantCoil::new(p, 0, 1, false, layer()).execute().unwrap();
        // Quadrants 0..=2 stay within the turn's own octagon ring.
        let ring_limit = 20.0 + 3.0 / FRAC_PI_8.cos() + TOLERANCE;
        for segment in &winding.segments()[..3] {
            for point in segment.points() {
                assert!(point.coords.norm() <= ring_limit);
            }
        }
        // The sole turn's boundary quadrant still ramps outward to the
        // exit radius: nominal + pitch at the closing top vertex.
        let closing_inner = winding.segments()[3].points()[4];
        let expected_y = (20.0 + 8.0) * FRAC_PI_8.cos();
        assert!(closing_inner.x.abs() < TOLERANCE);
        assert!((closing_inner.y - expected_y).abs() < TOLERANCE);
    }

    #[test]
    fn repeated_execution_is_identical() {
        let builder = QuadrantCoil::new(params(3), 1, 2, true, layer());
        let a = builder.execute().unwrap();
        let b = builder.execute().unwrap();
        assert_eq!(a, b);
    }
}
