//! Degenerate-input faults

/// All the ways caller-supplied vectors can fail to define what an operation
/// needs. No fault is fatal: the plain constructors substitute a documented
/// fallback (identity rotation, zero angle, zero vector) and the `try_`
/// variants surface one of these instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateInput {
    /// (ZeroVector) A direction was required but the magnitude is below
    /// [`EPSILON`](crate::float_types::EPSILON).
    #[error("zero-length vector where a direction is required")]
    ZeroVector,
    /// (ParallelVectors) An orthogonal pair was required but the inputs are
    /// parallel within tolerance.
    #[error("parallel vectors where an orthogonal pair is required")]
    ParallelVectors,
}
