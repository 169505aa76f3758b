//! Error types for the Hamiltonian model crate.

use thiserror::Error;

/// Errors produced while constructing or validating Hamiltonian terms.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HamError {
    /// `num_sites` outside the representable range.
    #[error("num_sites must be between 1 and 63, got {0}")]
    InvalidSiteCount(u32),

    /// A term references a site index outside `[0, num_sites)`.
    #[error("term references site {site} but the chain only has {num_sites} sites")]
    SiteOutOfRange {
        /// The offending site index.
        site: u32,
        /// Number of sites in the chain.
        num_sites: u32,
    },

    /// The same site appears more than once within a single term.
    #[error("site {0} appears more than once in a single term")]
    DuplicateSite(u32),

    /// An operator label string and its site list disagree in length.
    #[error("operator label has {labels} symbols but {sites} site indices")]
    LabelLengthMismatch {
        /// Number of symbols in the label.
        labels: usize,
        /// Number of site indices supplied.
        sites: usize,
    },

    /// An operator label contains a symbol other than I, X, Y or Z.
    #[error("unknown operator symbol '{0}' (expected I, X, Y or Z)")]
    UnknownSymbol(char),
}

/// Result type for Hamiltonian model operations.
pub type HamResult<T> = Result<T, HamError>;
