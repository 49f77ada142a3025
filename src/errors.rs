use thiserror::Error;

/// Error type for fluid system configuration problems.
///
/// Property evaluation itself is infallible: degenerate compositions are
/// handled with clamped denominators and index violations are programming
/// errors (debug assertions). Only the construction of a tabulated fluid
/// system can fail, namely when the requested tabulation grid is unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidSystemError {
    #[error("Invalid tabulation range: {0} = [{1}, {2}].")]
    InvalidRange(&'static str, f64, f64),
    #[error("Tabulation needs at least 2 ticks per axis, got {0} for {1}.")]
    TooFewTicks(usize, &'static str),
}

/// Convenience type for `Result<T, FluidSystemError>`.
pub type FluidSystemResult<T> = Result<T, FluidSystemError>;
