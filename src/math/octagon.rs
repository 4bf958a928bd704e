//! Vertex model for the octagonal coil cross-section.
//!
//! A turn is traced over 16 distinguished angular positions: the 8
//! corners of a regular octagon interleaved with the 8 midpoints of its
//! sides. Corners lie on the circumscribed circle of the octagon, side
//! midpoints on the inscribed (apothem) circle at `cos(π/8)` of the
//! nominal radius.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

/// Number of sides of the coil cross-section.
pub const SIDES: usize = 8;

/// Distinguished angular positions per revolution (corners + side midpoints).
pub const POSITIONS_PER_TURN: usize = 2 * SIDES;

const OUTER_ANGLE: f64 = (SIDES as f64 - 2.0) * PI / SIDES as f64;
const INNER_ANGLE: f64 = 2.0 * (PI - OUTER_ANGLE / 2.0 - FRAC_PI_2);

/// Angular step between consecutive vertex positions (`π/8` for the octagon).
pub const ANGULAR_STEP: f64 = INNER_ANGLE / 2.0;

/// Classification of a position on the 16-position octagon lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Midpoint of an octagon side, on the inscribed circle.
    SideMidpoint,
    /// Octagon corner, on the circumscribed circle.
    Corner,
}

/// One vertex position: polar angle paired with a radius-normalization
/// factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAngle {
    angle: f64,
    normalization: f64,
    kind: VertexKind,
}

impl VertexAngle {
    /// Returns the polar angle of this position in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the radius-normalization factor (`cos(π/8)` for side
    /// midpoints, `1` for corners).
    #[must_use]
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Returns the kind of this position.
    #[must_use]
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    /// Scales a nominal octagon radius to this vertex's actual radius.
    #[must_use]
    pub fn scaled_radius(&self, radius: f64) -> f64 {
        radius * self.normalization
    }

    /// Radial offset that moves this vertex outward such that the ring
    /// between the inner and offset octagons keeps a perpendicular
    /// width of `trace_width` across every side.
    ///
    /// A side midpoint moves along its side's normal, so the offset is
    /// the width itself. A corner sits between two sides whose normals
    /// are `π/8` away from the corner's radial direction, so it must
    /// travel `trace_width / cos(π/8)` to push both sides out by
    /// `trace_width`.
    #[must_use]
    pub fn radial_width_offset(&self, trace_width: f64) -> f64 {
        match self.kind {
            VertexKind::SideMidpoint => trace_width,
            VertexKind::Corner => trace_width / FRAC_PI_8.cos(),
        }
    }
}

/// Evaluates the vertex model at any integer position index.
///
/// The sequence starts at the top of the octagon (`π/2`) and advances
/// `π/8` per index; it is periodic with period 16 and total over all of
/// `i64` via Euclidean remainder.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn vertex_angle(position: i64) -> VertexAngle {
    let wrapped = position.rem_euclid(POSITIONS_PER_TURN as i64) as usize;
    let angle = FRAC_PI_2 + wrapped as f64 * ANGULAR_STEP;
    if wrapped % 2 == 0 {
        VertexAngle {
            angle,
            normalization: FRAC_PI_8.cos(),
            kind: VertexKind::SideMidpoint,
        }
    } else {
        VertexAngle {
            angle,
            normalization: 1.0,
            kind: VertexKind::Corner,
        }
    }
}
