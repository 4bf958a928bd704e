pub mod process;

pub use process::ProcessStack;

use serde::{Deserialize, Serialize};

use crate::math::{polygon, Point2};

/// Opaque layer/datatype pair attached to every emitted polygon.
///
/// The kernel never interprets layer semantics; the pair is carried
/// through to the persistence collaborator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRef {
    pub layer: i16,
    pub datatype: i16,
}

impl LayerRef {
    /// Creates a layer reference.
    #[must_use]
    pub fn new(layer: i16, datatype: i16) -> Self {
        Self { layer, datatype }
    }
}

/// One closed trace strip tagged with its target layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePolygon {
    points: Vec<Point2>,
    layer: LayerRef,
}

impl TracePolygon {
    /// Creates a polygon from an ordered, closed vertex sequence.
    #[must_use]
    pub fn new(points: Vec<Point2>, layer: LayerRef) -> Self {
        Self { points, layer }
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the layer tag.
    #[must_use]
    pub fn layer(&self) -> LayerRef {
        self.layer
    }

    /// Signed area of the polygon (positive for counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon::signed_area(&self.points)
    }
}

/// Boundary to the external layout-persistence collaborator.
///
/// Implementations receive already-computed polygons and do whatever
/// persistence they do (file export, viewing); nothing flows back into
/// the kernel.
pub trait PolygonSink {
    /// Accepts one computed polygon for the given layer.
    fn emit_polygon(&mut self, points: &[Point2], layer: LayerRef);
}

/// In-memory cell collecting emitted polygons.
///
/// The reference sink implementation, used by tests and by callers that
/// want to inspect or post-process geometry before handing it to a file
/// writer.
#[derive(Debug, Clone, Default)]
pub struct LayoutCell {
    name: String,
    polygons: Vec<TracePolygon>,
}

impl LayoutCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            polygons: Vec::new(),
        }
    }

    /// Returns the cell name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collected polygons in emission order.
    #[must_use]
    pub fn polygons(&self) -> &[TracePolygon] {
        &self.polygons
    }

    /// Returns the number of collected polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns whether the cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl PolygonSink for LayoutCell {
    fn emit_polygon(&mut self, points: &[Point2], layer: LayerRef) {
        self.polygons.push(TracePolygon::new(points.to_vec(), layer));
    }
}
