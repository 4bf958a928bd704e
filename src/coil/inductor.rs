use crate::error::Result;
use crate::layout::LayerRef;

use super::{CoilParameters, CoilWinding, CompassDirection, QuadrantCoil, SteppedSpiral};

/// Construction strategy for a single-coil spiral.
///
/// Both strategies share the octagon vertex geometry; they differ in
/// how vertices are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiralStrategy {
    /// Walk the compass directions step by step, solving each new
    /// vertex against a growing circle.
    IncrementalStepper,
    /// Build each quadrant directly from the octagon vertex model.
    #[default]
    QuadrantTable,
}

/// Builds a single-coil spiral inductor with a selectable construction
/// strategy.
#[derive(Debug)]
pub struct SpiralInductor {
    params: CoilParameters,
    strategy: SpiralStrategy,
    initial_direction: CompassDirection,
    layer: LayerRef,
}

impl SpiralInductor {
    /// Creates an inductor builder. The walk starts downward; see
    /// [`Self::with_initial_direction`].
    #[must_use]
    pub fn new(params: CoilParameters, strategy: SpiralStrategy, layer: LayerRef) -> Self {
        Self {
            params,
            strategy,
            initial_direction: CompassDirection::default(),
            layer,
        }
    }

    /// Overrides the initial travel direction. Only the incremental
    /// stepper walks, so the quadrant strategy ignores this.
    #[must_use]
    pub fn with_initial_direction(mut self, direction: CompassDirection) -> Self {
        self.initial_direction = direction;
        self
    }

    /// Executes the selected strategy.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying builder.
    pub fn execute(&self) -> Result<CoilWinding> {
        match self.strategy {
            SpiralStrategy::IncrementalStepper => {
                SteppedSpiral::new(self.params, self.initial_direction, self.layer).execute()
            }
            SpiralStrategy::QuadrantTable => {
                QuadrantCoil::new(self.params, 0, 1, false, self.layer).execute()
            }
        }
    }
}
