//! First-order electrical analysis of a transformer link.
//!
//! Sizing companion to the geometry builders: given the load and the
//! quality factors the process can deliver, it yields the inductances a
//! resonant 1:n link wants and the best efficiency it can reach. Pure
//! forward evaluation; it does not search for coil parameters.

use std::f64::consts::TAU;

use crate::error::{ParameterError, Result};

/// Operating point of a 1:n transformer driving a parallel RC load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformerLink {
    load_resistance: f64,
    primary_q: f64,
    secondary_q: f64,
    load_capacitance: f64,
    frequency: f64,
    turns_ratio: f64,
    coupling: f64,
}

impl TransformerLink {
    /// Creates a validated operating point.
    ///
    /// # Errors
    ///
    /// - `ParameterError::NotPositive` if any quantity is zero or
    ///   negative
    /// - `ParameterError::OutOfRange` if `coupling` exceeds 1
    #[allow(clippy::similar_names)]
    pub fn new(
        load_resistance: f64,
        primary_q: f64,
        secondary_q: f64,
        load_capacitance: f64,
        frequency: f64,
        turns_ratio: f64,
        coupling: f64,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("load_resistance", load_resistance),
            ("primary_q", primary_q),
            ("secondary_q", secondary_q),
            ("load_capacitance", load_capacitance),
            ("frequency", frequency),
            ("turns_ratio", turns_ratio),
            ("coupling", coupling),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::NotPositive { parameter, value }.into());
            }
        }
        if coupling > 1.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "coupling",
                value: coupling,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(Self {
            load_resistance,
            primary_q,
            secondary_q,
            load_capacitance,
            frequency,
            turns_ratio,
            coupling,
        })
    }

    fn angular_frequency(&self) -> f64 {
        TAU * self.frequency
    }

    /// Secondary inductance that resonates the load capacitance out at
    /// the operating frequency: `L2 = 1 / (ω² C_L)`.
    #[must_use]
    pub fn secondary_inductance(&self) -> f64 {
        let w = self.angular_frequency();
        1.0 / (w * w * self.load_capacitance)
    }

    /// Primary inductance for the 1:n turns ratio: `L1 = L2 / n²`.
    #[must_use]
    pub fn primary_inductance(&self) -> f64 {
        self.secondary_inductance() / (self.turns_ratio * self.turns_ratio)
    }

    /// Maximum achievable power-transfer efficiency of the link.
    ///
    /// The load reflected into the primary competes with the loss
    /// resistances of both coils; coupling scales how much of the
    /// primary current actually reaches the secondary.
    #[must_use]
    pub fn max_efficiency(&self) -> f64 {
        let w = self.angular_frequency();
        let l1 = self.primary_inductance();
        let reflected_load = self.load_resistance / (self.turns_ratio * self.turns_ratio);

        let secondary_branch = w * l1 / self.secondary_q + reflected_load;
        let primary_loss =
            secondary_branch / (w * self.coupling * l1).powi(2) * (w * l1 / self.primary_q);

        reflected_load / (primary_loss + secondary_branch)
    }

    /// Maximum efficiency expressed in decibels.
    #[must_use]
    pub fn max_efficiency_db(&self) -> f64 {
        10.0 * self.max_efficiency().log10()
    }
}
