use thiserror::Error;

/// Top-level error type for the Coilis layout kernel.
#[derive(Debug, Error)]
pub enum CoilisError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Errors raised while validating caller-supplied coil parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be positive")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("spacing = {0} must not be negative")]
    NegativeSpacing(f64),

    #[error("a coil needs at least one turn")]
    NoTurns,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("({x}, {y}) is not one of the 8 compass directions")]
    InvalidDirection { x: i32, y: i32 },
}

/// Errors raised by geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "circle of radius {radius} is unreachable from ({x}, {y}) along ({dx}, {dy})"
    )]
    UnreachableRadius {
        radius: f64,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
    },

    #[error("zero-length direction vector")]
    ZeroVector,
}

/// Errors raised while resolving the process layer stack.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("process stack has no layer for role {0:?}")]
    UnknownRole(String),

    #[error("malformed process stack: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read process stack: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`CoilisError`].
pub type Result<T> = std::result::Result<T, CoilisError>;
