use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

use tracing::debug;

use crate::error::Result;
use crate::layout::{LayerRef, TracePolygon};
use crate::math::{ray_circle, Point2, Vector2};

use super::{CoilParameters, CoilWinding, CompassDirection};

/// Steps per full turn of the walk, one per octagon side.
const STEPS_PER_TURN: usize = 8;

/// Builds a single-coil octagonal spiral by walking the 8 compass
/// directions an eighth of a turn at a time.
///
/// # Algorithm
///
/// 1. Place the start vertex on the `inner_radius` circle at the angle
///    belonging to `initial_direction`.
/// 2. Each step travels along the current compass direction until it
///    meets the next, slightly larger circle (solved by
///    [`ray_circle::forward_intersection`]), then rotates the direction
///    table one position.
/// 3. Each step emits one quadrilateral strip around the centerline
///    segment. The strip edges sit `trace_width / (2·cos(π/8))` away
///    from the centerline vertices along the bisectors of the adjacent
///    travel directions, which keeps the perpendicular width at exactly
///    `trace_width` through every 45° corner.
#[derive(Debug)]
pub struct SteppedSpiral {
    params: CoilParameters,
    initial_direction: CompassDirection,
    layer: LayerRef,
}

impl SteppedSpiral {
    /// Creates a new spiral walk.
    #[must_use]
    pub fn new(
        params: CoilParameters,
        initial_direction: CompassDirection,
        layer: LayerRef,
    ) -> Self {
        Self {
            params,
            initial_direction,
            layer,
        }
    }

    /// Executes the walk, producing `8 · num_turns` trace segments.
    ///
    /// # Errors
    ///
    /// Propagates `GeometryError::UnreachableRadius` from the stepper;
    /// with validated [`CoilParameters`] the target radii grow
    /// monotonically, so this indicates a sequencing bug rather than a
    /// recoverable condition.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<CoilWinding> {
        let inner_radius = self.params.inner_radius();
        let pitch = self.params.pitch();
        let cos_pi_8 = FRAC_PI_8.cos();
        let half_width = self.params.trace_width() / (2.0 * cos_pi_8);

        let start_angle =
            3.0 * FRAC_PI_8 + FRAC_PI_4 * self.initial_direction.index() as f64;
        let mut current = Point2::new(
            inner_radius * start_angle.cos(),
            inner_radius * start_angle.sin(),
        );

        let steps = STEPS_PER_TURN * self.params.num_turns();
        let mut segments = Vec::with_capacity(steps);
        for step_idx in 0..steps {
            let step = step_idx as f64 / STEPS_PER_TURN as f64;
            let next_radius = inner_radius + (step + 0.125) * pitch / cos_pi_8;

            let dir = self.initial_direction.advance(step_idx);
            let next =
                ray_circle::forward_intersection(&current, &dir.grid_vector(), next_radius)?;

            let (bisector_in, bisector_out) = edge_bisectors(self.initial_direction, step_idx);
            let u_in = Vector2::new(bisector_in.cos(), bisector_in.sin());
            let u_out = Vector2::new(bisector_out.cos(), bisector_out.sin());

            segments.push(TracePolygon::new(
                vec![
                    current - half_width * u_in,
                    next - half_width * u_out,
                    next + half_width * u_out,
                    current + half_width * u_in,
                ],
                self.layer,
            ));
            current = next;
        }

        debug!(
            num_turns = self.params.num_turns(),
            segments = segments.len(),
            "built stepped spiral winding"
        );
        Ok(CoilWinding::new(segments))
    }
}

/// Bisector angles for the two cross-edges of the step's strip.
///
/// The start edge bisects the previous and current travel directions,
/// the end edge the current and next ones. Axis-aligned steps follow
/// diagonal steps and vice versa, so the bisector is always `π/8` to
/// one side of a travel direction's normal; which side depends on
/// whether the step is axis-aligned.
fn edge_bisectors(initial_direction: CompassDirection, step_idx: usize) -> (f64, f64) {
    let dir = initial_direction.advance(step_idx);
    if dir.is_axis_aligned() {
        let prev = initial_direction.advance(step_idx + 7);
        let next = initial_direction.advance(step_idx + 1);
        (
            prev.angle() + FRAC_PI_2 + FRAC_PI_8,
            next.angle() + FRAC_PI_2 - FRAC_PI_8,
        )
    } else {
        (
            dir.angle() + FRAC_PI_2 - FRAC_PI_8,
            dir.angle() + FRAC_PI_2 + FRAC_PI_8,
        )
    }
}
