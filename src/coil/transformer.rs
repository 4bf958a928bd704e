use tracing::debug;

use crate::error::Result;
use crate::layout::{LayerRef, PolygonSink, ProcessStack};

use super::{CoilParameters, CoilWinding, EntryExitTraces, QuadrantCoil, TerminalSet};

/// Layer assignment for the three polygon roles a transformer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformerLayers {
    /// Winding trace metal.
    pub trace: LayerRef,
    /// Terminal lead metal (routed one level below the traces).
    pub lead: LayerRef,
    /// Via footprints stitching leads to traces.
    pub via: LayerRef,
}

impl TransformerLayers {
    /// Resolves the three roles from a process stack.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::UnknownRole` for any role the stack does
    /// not define.
    pub fn from_process(
        stack: &ProcessStack,
        trace_role: &str,
        lead_role: &str,
        via_role: &str,
    ) -> Result<Self> {
        Ok(Self {
            trace: stack.require(trace_role)?,
            lead: stack.require(lead_role)?,
            via: stack.require(via_role)?,
        })
    }
}

/// Complete transformer geometry: two interleaved windings plus the
/// optional terminal set.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformerLayout {
    pub primary: CoilWinding,
    pub secondary: CoilWinding,
    pub terminals: Option<TerminalSet>,
}

impl TransformerLayout {
    /// Hands every polygon of the layout to the persistence
    /// collaborator: primary winding, secondary winding, then
    /// terminals.
    pub fn emit_into(&self, sink: &mut dyn PolygonSink) {
        self.primary.emit_into(sink);
        self.secondary.emit_into(sink);
        if let Some(terminals) = &self.terminals {
            terminals.emit_into(sink);
        }
    }
}

/// Builds a two-coil spiral transformer: a primary and a radially
/// interleaved secondary, wound over the same octagon lattice.
///
/// With `opposite_side_entry` the secondary is mirrored 180° so the two
/// coils terminate on opposite sides of the octagon; only then can
/// entry/exit leads be laid out (they land in the secondary's half-turn
/// winding gaps).
#[derive(Debug)]
pub struct SpiralTransformer {
    params: CoilParameters,
    opposite_side_entry: bool,
    add_entry_exit_traces: bool,
    layers: TransformerLayers,
}

impl SpiralTransformer {
    /// Creates a transformer builder.
    #[must_use]
    pub fn new(
        params: CoilParameters,
        opposite_side_entry: bool,
        add_entry_exit_traces: bool,
        layers: TransformerLayers,
    ) -> Self {
        Self {
            params,
            opposite_side_entry,
            add_entry_exit_traces,
            layers,
        }
    }

    /// Executes both coil builders and, when requested and possible,
    /// the terminal layout.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying builders.
    pub fn execute(&self) -> Result<TransformerLayout> {
        let primary = QuadrantCoil::new(
            self.params,
            0,
            2,
            self.opposite_side_entry,
            self.layers.trace,
        )
        .execute()?;
        let secondary = QuadrantCoil::new(
            self.params,
            1,
            2,
            self.opposite_side_entry,
            self.layers.trace,
        )
        .execute()?;

        let terminals = if self.add_entry_exit_traces && self.opposite_side_entry {
            Some(
                EntryExitTraces::new(self.params, self.layers.lead, self.layers.via)
                    .execute()?,
            )
        } else {
            None
        };

        debug!(
            primary_segments = primary.len(),
            secondary_segments = secondary.len(),
            has_terminals = terminals.is_some(),
            "built spiral transformer"
        );
        Ok(TransformerLayout {
            primary,
            secondary,
            terminals,
        })
    }
}
