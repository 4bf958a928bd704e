use crate::error::{ParameterError, Result};

/// Caller-supplied parameters shared by every coil builder.
///
/// Immutable once constructed; builders only read them. All lengths
/// share one unit (micrometers in the reference process).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilParameters {
    trace_width: f64,
    inner_radius: f64,
    num_turns: usize,
    spacing: f64,
}

impl CoilParameters {
    /// Creates a validated parameter set.
    ///
    /// `inner_radius` is the distance from the coil center to the
    /// centerline of the innermost trace.
    ///
    /// # Errors
    ///
    /// - `ParameterError::NotPositive` if `trace_width` or
    ///   `inner_radius` is zero or negative
    /// - `ParameterError::NegativeSpacing` if `spacing` is negative
    /// - `ParameterError::NoTurns` if `num_turns` is zero
    pub fn new(
        trace_width: f64,
        inner_radius: f64,
        num_turns: usize,
        spacing: f64,
    ) -> Result<Self> {
        if trace_width <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "trace_width",
                value: trace_width,
            }
            .into());
        }
        if inner_radius <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "inner_radius",
                value: inner_radius,
            }
            .into());
        }
        if spacing < 0.0 {
            return Err(ParameterError::NegativeSpacing(spacing).into());
        }
        if num_turns == 0 {
            return Err(ParameterError::NoTurns.into());
        }
        Ok(Self {
            trace_width,
            inner_radius,
            num_turns,
            spacing,
        })
    }

    /// Returns the trace width.
    #[must_use]
    pub fn trace_width(&self) -> f64 {
        self.trace_width
    }

    /// Returns the inner radius.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Returns the number of turns.
    #[must_use]
    pub fn num_turns(&self) -> usize {
        self.num_turns
    }

    /// Returns the spacing between adjacent turns.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Radial pitch between adjacent turns of one coil.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.spacing + self.trace_width
    }
}

impl Default for CoilParameters {
    /// The reference process operating point.
    fn default() -> Self {
        Self {
            trace_width: 3.0,
            inner_radius: 20.0,
            num_turns: 4,
            spacing: 7.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accepts_valid_parameters() {
        let p = CoilParameters::new(3.0, 20.0, 4, 7.0).unwrap();
        assert_relative_eq!(p.pitch(), 10.0);
        assert_eq!(p.num_turns(), 4);
    }

    #[test]
    fn zero_spacing_is_valid() {
        assert!(CoilParameters::new(3.0, 20.0, 1, 0.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_widths() {
        assert!(CoilParameters::new(0.0, 20.0, 4, 7.0).is_err());
        assert!(CoilParameters::new(-1.0, 20.0, 4, 7.0).is_err());
        assert!(CoilParameters::new(3.0, 0.0, 4, 7.0).is_err());
    }

    #[test]
    fn rejects_negative_spacing() {
        assert!(CoilParameters::new(3.0, 20.0, 4, -0.5).is_err());
    }

    #[test]
    fn rejects_zero_turns() {
        assert!(CoilParameters::new(3.0, 20.0, 0, 7.0).is_err());
    }

    #[test]
    fn default_is_valid() {
        let d = CoilParameters::default();
        assert!(CoilParameters::new(
            d.trace_width(),
            d.inner_radius(),
            d.num_turns(),
            d.spacing()
        )
        .is_ok());
    }
}
