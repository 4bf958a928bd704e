use std::f64::consts::FRAC_PI_8;

use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::layout::{LayerRef, PolygonSink, TracePolygon};
use crate::math::Point2;

use super::CoilParameters;

/// Default via square side length.
pub const DEFAULT_VIA_SIDE_LENGTH: f64 = 0.36;

/// Default center-to-center via spacing.
pub const DEFAULT_VIA_SPACING: f64 = 1.06;

/// Default clearance a lead extends past the common boundary radius.
pub const DEFAULT_ENTRY_EXIT_DISTANCE: f64 = 10.0;

/// A rectangular array of square via footprints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViaGrid {
    pub side_length: f64,
    pub spacing: f64,
    pub columns: usize,
    pub rows: usize,
}

impl Default for ViaGrid {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_VIA_SIDE_LENGTH,
            spacing: DEFAULT_VIA_SPACING,
            columns: 2,
            rows: 2,
        }
    }
}

/// Terminal geometry of an opposite-side-entry transformer: four leads
/// plus their via pads, all reaching one shared boundary radius.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSet {
    /// Lead rectangles in anchor order: coil-0 entry, coil-1 entry,
    /// coil-0 exit, coil-1 exit.
    pub leads: Vec<TracePolygon>,
    /// Via squares, grouped per anchor in the same order.
    pub vias: Vec<TracePolygon>,
    /// Largest radial coordinate among the four anchors; every lead
    /// runs out to this radius (plus the configured clearance).
    pub boundary_radius: f64,
}

impl TerminalSet {
    /// Hands every lead and via polygon to the persistence collaborator.
    pub fn emit_into(&self, sink: &mut dyn PolygonSink) {
        for polygon in self.leads.iter().chain(&self.vias) {
            sink.emit_polygon(polygon.points(), polygon.layer());
        }
    }
}

/// Computes terminal leads and via pads for a two-coil transformer with
/// opposite-side entry.
///
/// The four terminal anchors sit just off the winding gaps, displaced
/// laterally by `2 · trace_width` so the leads clear the coil's own
/// trace. Coil-0 anchors route upward, coil-1 anchors downward, and
/// all four leads stop at the same boundary radius so downstream
/// connections can assume a common exit ring.
#[derive(Debug)]
pub struct EntryExitTraces {
    params: CoilParameters,
    entry_exit_distance: f64,
    via: ViaGrid,
    lead_layer: LayerRef,
    via_layer: LayerRef,
}

impl EntryExitTraces {
    /// Creates a terminal builder with the default via grid and
    /// boundary clearance.
    #[must_use]
    pub fn new(params: CoilParameters, lead_layer: LayerRef, via_layer: LayerRef) -> Self {
        Self {
            params,
            entry_exit_distance: DEFAULT_ENTRY_EXIT_DISTANCE,
            via: ViaGrid::default(),
            lead_layer,
            via_layer,
        }
    }

    /// Overrides the clearance past the boundary radius.
    #[must_use]
    pub fn with_entry_exit_distance(mut self, distance: f64) -> Self {
        self.entry_exit_distance = distance;
        self
    }

    /// Overrides the via grid.
    #[must_use]
    pub fn with_via_grid(mut self, via: ViaGrid) -> Self {
        self.via = via;
        self
    }

    /// Executes the builder.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NotPositive` if the via grid's side
    /// length or either grid count is zero or negative.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<TerminalSet> {
        if self.via.side_length <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "via_side_length",
                value: self.via.side_length,
            }
            .into());
        }
        if self.via.columns == 0 || self.via.rows == 0 {
            return Err(ParameterError::NotPositive {
                parameter: "via_grid_count",
                value: 0.0,
            }
            .into());
        }

        let w = self.params.trace_width();
        let r = self.params.inner_radius();
        let pitch = self.params.pitch();
        let turns = self.params.num_turns() as f64;
        let c = FRAC_PI_8.cos();

        // Anchor points of the four terminals. Entries sit at the inner
        // winding gap, exits just past the outermost turn; each is
        // pushed sideways so the lead clears the trace it belongs to.
        let coil0_entry = Point2::new(-2.0 * w, r * c + w / 2.0);
        let coil1_entry = Point2::new(2.0 * w, -(r * c + w / 2.0 + pitch * c));
        let coil0_exit = Point2::new(2.0 * w, r * c + w / 2.0 + 2.0 * turns * pitch * c);
        let coil1_exit =
            Point2::new(-2.0 * w, -(r * c + w / 2.0 + (2.0 * turns - 1.0) * pitch * c));

        let anchors = [
            (coil0_entry, 1.0),
            (coil1_entry, -1.0),
            (coil0_exit, 1.0),
            (coil1_exit, -1.0),
        ];

        let boundary_radius = anchors
            .iter()
            .map(|(anchor, _)| anchor.y.abs())
            .fold(0.0, f64::max);

        let mut leads = Vec::with_capacity(anchors.len());
        let mut vias = Vec::with_capacity(anchors.len() * self.via.columns * self.via.rows);
        for (anchor, outward) in anchors {
            let length = boundary_radius - anchor.y.abs() + self.entry_exit_distance;
            leads.push(self.lead_rectangle(anchor, outward, length));
            self.via_pads(anchor, &mut vias);
        }

        debug!(
            boundary_radius,
            leads = leads.len(),
            vias = vias.len(),
            "built entry/exit terminals"
        );
        Ok(TerminalSet {
            leads,
            vias,
            boundary_radius,
        })
    }

    /// Rectangle of width `trace_width` from the anchor out to the
    /// boundary, extending in `+y` (`outward = 1`) or `-y`
    /// (`outward = -1`).
    fn lead_rectangle(&self, anchor: Point2, outward: f64, length: f64) -> TracePolygon {
        let half = self.params.trace_width() / 2.0;
        let (y_min, y_max) = if outward > 0.0 {
            (-half, half + length)
        } else {
            (-half - length, half)
        };
        TracePolygon::new(
            vec![
                Point2::new(anchor.x - half, anchor.y + y_min),
                Point2::new(anchor.x + half, anchor.y + y_min),
                Point2::new(anchor.x + half, anchor.y + y_max),
                Point2::new(anchor.x - half, anchor.y + y_max),
            ],
            self.lead_layer,
        )
    }

    /// Appends the via squares of one anchor's grid, centered on the
    /// anchor.
    #[allow(clippy::cast_precision_loss)]
    fn via_pads(&self, anchor: Point2, out: &mut Vec<TracePolygon>) {
        let half = self.via.side_length / 2.0;
        for column in 0..self.via.columns {
            for row in 0..self.via.rows {
                let cx = anchor.x
                    + (column as f64 - (self.via.columns as f64 - 1.0) / 2.0) * self.via.spacing;
                let cy = anchor.y
                    + (row as f64 - (self.via.rows as f64 - 1.0) / 2.0) * self.via.spacing;
                out.push(TracePolygon::new(
                    vec![
                        Point2::new(cx - half, cy - half),
                        Point2::new(cx + half, cy - half),
                        Point2::new(cx + half, cy + half),
                        Point2::new(cx - half, cy + half),
                    ],
                    self.via_layer,
                ));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn builder() -> EntryExitTraces {
        let params = CoilParameters::new(3.0, 20.0, 3, 5.0).unwrap();
        EntryExitTraces::new(params, LayerRef::new(36, 0), LayerRef::new(35, 0))
    }

    #[test]
    fn four_leads_with_via_grids() {
        let set = builder().execute().unwrap();
        assert_eq!(set.leads.len(), 4);
        assert_eq!(set.vias.len(), 4 * 4);
        for lead in &set.leads {
            assert_eq!(lead.layer(), LayerRef::new(36, 0));
        }
        for via in &set.vias {
            assert_eq!(via.layer(), LayerRef::new(35, 0));
        }
    }

    #[test]
    fn all_leads_reach_the_boundary_radius() {
        let set = builder().execute().unwrap();
        let w = 3.0;
        let expected_reach = set.boundary_radius + w / 2.0 + DEFAULT_ENTRY_EXIT_DISTANCE;
        for (i, lead) in set.leads.iter().enumerate() {
            let reach = lead
                .points()
                .iter()
                .map(|p| p.y.abs())
                .fold(0.0, f64::max);
            assert!(
                (reach - expected_reach).abs() < TOLERANCE,
                "lead {i}: reach = {reach}"
            );
        }
    }

    #[test]
    fn boundary_radius_is_the_exit_of_the_outermost_coil() {
        // For these parameters the farthest anchor is coil 0's exit.
        let set = builder().execute().unwrap();
        let c = FRAC_PI_8.cos();
        let expected = 20.0 * c + 1.5 + 2.0 * 3.0 * 8.0 * c;
        assert!((set.boundary_radius - expected).abs() < TOLERANCE);
    }

    #[test]
    fn leads_are_trace_width_wide() {
        let set = builder().execute().unwrap();
        for lead in &set.leads {
            let p = lead.points();
            assert!((p[1].x - p[0].x - 3.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn coil0_leads_run_up_and_coil1_leads_run_down() {
        let set = builder().execute().unwrap();
        let tops: Vec<f64> = set
            .leads
            .iter()
            .map(|l| l.points().iter().map(|p| p.y).fold(f64::MIN, f64::max))
            .collect();
        assert!(tops[0] > 0.0 && tops[2] > 0.0);
        assert!(tops[1] < 0.0 && tops[3] < 0.0);
    }

    #[test]
    fn via_grid_is_centered_on_each_anchor() {
        let set = builder().execute().unwrap();
        // Mean of the 2x2 grid centers reproduces the anchor; compare
        // the first group against the coil-0 entry anchor.
        let group = &set.vias[..4];
        let mean_x: f64 = group
            .iter()
            .flat_map(|v| v.points())
            .map(|p| p.x)
            .sum::<f64>()
            / 16.0;
        let mean_y: f64 = group
            .iter()
            .flat_map(|v| v.points())
            .map(|p| p.y)
            .sum::<f64>()
            / 16.0;
        let c = FRAC_PI_8.cos();
        assert!((mean_x - (-6.0)).abs() < TOLERANCE);
        assert!((mean_y - (20.0 * c + 1.5)).abs() < TOLERANCE);
    }

    #[test]
    fn custom_via_grid_changes_the_count() {
        let set = builder()
            .with_via_grid(ViaGrid {
                side_length: 0.5,
                spacing: 1.0,
                columns: 3,
                rows: 2,
            })
            .execute()
            .unwrap();
        assert_eq!(set.vias.len(), 4 * 6);
    }

    #[test]
    fn degenerate_via_grid_is_rejected() {
        assert!(builder()
            .with_via_grid(ViaGrid {
                side_length: 0.0,
                ..ViaGrid::default()
            })
            .execute()
            .is_err());
        assert!(builder()
            .with_via_grid(ViaGrid {
                columns: 0,
                ..ViaGrid::default()
            })
            .execute()
            .is_err());
    }

    #[test]
    fn repeated_execution_is_identical() {
        let a = builder().execute().unwrap();
        let b = builder().execute().unwrap();
        assert_eq!(a, b);
    }
}
