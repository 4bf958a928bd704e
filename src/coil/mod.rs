pub mod direction;
pub mod inductor;
pub mod parameters;
pub mod quadrant;
pub mod spiral;
pub mod terminals;
pub mod transformer;

pub use direction::CompassDirection;
pub use inductor::{SpiralInductor, SpiralStrategy};
pub use parameters::CoilParameters;
pub use quadrant::QuadrantCoil;
pub use spiral::SteppedSpiral;
pub use terminals::{EntryExitTraces, TerminalSet, ViaGrid};
pub use transformer::{SpiralTransformer, TransformerLayers, TransformerLayout};

use crate::layout::{PolygonSink, TracePolygon};

/// One continuous electrical path: the ordered trace segments of a
/// single coil, from its innermost vertex to its outermost.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoilWinding {
    segments: Vec<TracePolygon>,
}

impl CoilWinding {
    pub(crate) fn new(segments: Vec<TracePolygon>) -> Self {
        Self { segments }
    }

    /// Returns the trace segments in winding order.
    #[must_use]
    pub fn segments(&self) -> &[TracePolygon] {
        &self.segments
    }

    /// Returns the number of trace segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the winding has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Hands every segment to the persistence collaborator, in winding
    /// order.
    pub fn emit_into(&self, sink: &mut dyn PolygonSink) {
        for segment in &self.segments {
            sink.emit_polygon(segment.points(), segment.layer());
        }
    }
}
