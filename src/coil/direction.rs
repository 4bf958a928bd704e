use crate::error::{ParameterError, Result};
use crate::math::Vector2;

/// The 8 canonical compass directions of the octagon walk.
///
/// Listed in winding order: each successive direction turns the heading
/// 45° counter-clockwise, so cycling through the table once traces one
/// full turn of the spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompassDirection {
    Left,
    DownLeft,
    #[default]
    Down,
    DownRight,
    Right,
    UpRight,
    Up,
    UpLeft,
}

impl CompassDirection {
    /// All directions in winding order.
    pub const CYCLE: [CompassDirection; 8] = [
        CompassDirection::Left,
        CompassDirection::DownLeft,
        CompassDirection::Down,
        CompassDirection::DownRight,
        CompassDirection::Right,
        CompassDirection::UpRight,
        CompassDirection::Up,
        CompassDirection::UpLeft,
    ];

    /// Resolves a grid vector with components in `{-1, 0, 1}` to its
    /// compass direction.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidDirection` for any vector that is
    /// not one of the 8 canonical directions.
    pub fn from_grid(x: i32, y: i32) -> Result<Self> {
        match (x, y) {
            (-1, 0) => Ok(CompassDirection::Left),
            (-1, -1) => Ok(CompassDirection::DownLeft),
            (0, -1) => Ok(CompassDirection::Down),
            (1, -1) => Ok(CompassDirection::DownRight),
            (1, 0) => Ok(CompassDirection::Right),
            (1, 1) => Ok(CompassDirection::UpRight),
            (0, 1) => Ok(CompassDirection::Up),
            (-1, 1) => Ok(CompassDirection::UpLeft),
            _ => Err(ParameterError::InvalidDirection { x, y }.into()),
        }
    }

    /// Index of this direction within [`Self::CYCLE`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            CompassDirection::Left => 0,
            CompassDirection::DownLeft => 1,
            CompassDirection::Down => 2,
            CompassDirection::DownRight => 3,
            CompassDirection::Right => 4,
            CompassDirection::UpRight => 5,
            CompassDirection::Up => 6,
            CompassDirection::UpLeft => 7,
        }
    }

    /// The direction `steps` positions further along the winding cycle.
    #[must_use]
    pub fn advance(self, steps: usize) -> Self {
        Self::CYCLE[(self.index() + steps) % Self::CYCLE.len()]
    }

    /// Grid vector of this direction (components in `{-1, 0, 1}`; not
    /// normalized, diagonals have length √2).
    #[must_use]
    pub fn grid_vector(self) -> Vector2 {
        match self {
            CompassDirection::Left => Vector2::new(-1.0, 0.0),
            CompassDirection::DownLeft => Vector2::new(-1.0, -1.0),
            CompassDirection::Down => Vector2::new(0.0, -1.0),
            CompassDirection::DownRight => Vector2::new(1.0, -1.0),
            CompassDirection::Right => Vector2::new(1.0, 0.0),
            CompassDirection::UpRight => Vector2::new(1.0, 1.0),
            CompassDirection::Up => Vector2::new(0.0, 1.0),
            CompassDirection::UpLeft => Vector2::new(-1.0, 1.0),
        }
    }

    /// Whether this direction is parallel to a coordinate axis (as
    /// opposed to the 45° diagonals).
    #[must_use]
    pub fn is_axis_aligned(self) -> bool {
        matches!(
            self,
            CompassDirection::Left
                | CompassDirection::Right
                | CompassDirection::Up
                | CompassDirection::Down
        )
    }

    /// Heading angle of this direction in radians.
    #[must_use]
    pub fn angle(self) -> f64 {
        let v = self.grid_vector();
        v.y.atan2(v.x)
    }
}
