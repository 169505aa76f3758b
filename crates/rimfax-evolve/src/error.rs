//! Error types for the evolution crate.

use thiserror::Error;

/// Errors produced by time-evolution synthesis and execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvolveError {
    /// Hamiltonian contains no terms.
    #[error("Hamiltonian is empty — no terms to synthesise")]
    EmptyHamiltonian,

    /// Requested product-formula order is not 1 or an even integer.
    #[error("product-formula order must be 1 or an even integer ≥ 2, got {0}")]
    UnsupportedOrder(u32),

    /// num_steps must be ≥ 1.
    #[error("num_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// n_samples must be ≥ 1 for QDrift.
    #[error("n_samples must be at least 1, got {0}")]
    InvalidSamples(usize),

    /// State and operator dimensions disagree.
    #[error("state has dimension {got} but the operator acts on dimension {expected}")]
    DimensionMismatch {
        /// Dimension the operator acts on.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },

    /// An evolution or sample time is negative or non-finite.
    #[error("evolution time must be finite and non-negative, got {0}")]
    InvalidTime(f64),

    /// Supplied amplitudes do not form a unit vector.
    #[error("state vector is not normalised: |ψ| = {norm}")]
    NotNormalized {
        /// The offending norm.
        norm: f64,
    },

    /// A bitstring constructor received something other than '0'/'1' bits.
    #[error("bitstring must be non-empty and contain only '0' and '1', got \"{0}\"")]
    InvalidBitstring(String),

    /// The cooperative deadline on the dense-matrix path elapsed.
    #[error("deadline exceeded during dense evolution")]
    DeadlineExceeded,

    /// Hamiltonian model error.
    #[error("Hamiltonian model error: {0}")]
    Ham(#[from] rimfax_ham::HamError),
}

/// Result type for evolution operations.
pub type EvolveResult<T> = Result<T, EvolveError>;
