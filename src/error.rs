//! Construction errors.
use thiserror::Error;

/// Reasons a permutation can't be constructed.
///
/// All of these are deterministic functions of the input. A failed construction has no side
/// effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermError {
    /// The mapping is not a bijection on the points it moves.
    #[error("mapping is not injective: {mapping}")]
    NotInjective { mapping: String },

    /// A cycle sequence contains a duplicate that isn't a repetition of the whole cycle.
    #[error("cycle mapping is inconsistent (not injective): {points}")]
    InconsistentCycle { points: String },

    /// A cycle sequence repeats, but the repetition doesn't follow the cycle.
    #[error("cycle points are not cyclic: {points}")]
    NonCyclic { points: String },

    /// Sampling was requested without a usable domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
