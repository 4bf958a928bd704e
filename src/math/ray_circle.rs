use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Steps a point forward onto a circle centered at the origin.
///
/// Finds the intersections of the line `origin + t * direction` with the
/// circle of radius `target_radius` by substituting the parametric line
/// into the circle equation and solving the resulting quadratic for `t`,
/// then returns the intersection **farther from `origin`**. When a
/// spiral walk is feeding this with monotonically growing radii, the
/// farther root is the forward-progressing point; the nearer one would
/// fold the path back onto itself.
///
/// `direction` does not need to be normalized.
///
/// # Errors
///
/// - `GeometryError::ZeroVector` if `direction` has zero length
/// - `GeometryError::UnreachableRadius` if the line misses the circle,
///   i.e. the perpendicular distance from the origin to the line exceeds
///   `target_radius`
pub fn forward_intersection(
    origin: &Point2,
    direction: &Vector2,
    target_radius: f64,
) -> Result<Point2> {
    let len_sq = direction.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }

    // (origin + t*direction) · (origin + t*direction) = r²
    let a = len_sq;
    let b = 2.0 * origin.coords.dot(direction);
    let c = origin.coords.norm_squared() - target_radius * target_radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return Err(GeometryError::UnreachableRadius {
            radius: target_radius,
            x: origin.x,
            y: origin.y,
            dx: direction.x,
            dy: direction.y,
        }
        .into());
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let t_near = (-b - disc_sqrt) / (2.0 * a);
    let t_far = (-b + disc_sqrt) / (2.0 * a);
    let t = if t_near.abs() > t_far.abs() {
        t_near
    } else {
        t_far
    };

    Ok(Point2::new(
        origin.x + direction.x * t,
        origin.y + direction.y * t,
    ))
}
