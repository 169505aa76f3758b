//! Hamiltonian data structures.
//!
//! A Hamiltonian on a chain of `num_sites` spins is a sum of weighted Pauli
//! strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-site Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℂ.  Hermitian operators carry real coefficients;
//! the model does not enforce hermiticity.
//!
//! # Example
//!
//! ```rust
//! use rimfax_ham::{Hamiltonian, WeightedTerm};
//!
//! // H = -1.0·Z₀Z₁ + 0.5·X₀  on a 2-site chain
//! let h = Hamiltonian::new(
//!     vec![WeightedTerm::zz(0, 1, -1.0), WeightedTerm::x(0, 0.5)],
//!     2,
//! )
//! .unwrap();
//! assert_eq!(h.n_terms(), 2);
//! ```

use ndarray::Array2;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HamError, HamResult};
use crate::pauli::{PauliOp, PauliString};

/// Site count above which dense materialization is flagged as infeasible.
const DENSE_WARN_SITES: u32 = 14;

/// A single weighted Pauli term: `coeff · string`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Complex coefficient.
    pub coeff: Complex64,
    /// The Pauli string.
    pub string: PauliString,
}

impl WeightedTerm {
    /// Create a new term.
    pub fn new(coeff: impl Into<Complex64>, string: PauliString) -> Self {
        Self {
            coeff: coeff.into(),
            string,
        }
    }

    /// Parse a term from an operator label plus site indices.
    pub fn from_labels(labels: &str, sites: &[u32], coeff: impl Into<Complex64>) -> HamResult<Self> {
        Ok(Self::new(coeff, PauliString::from_labels(labels, sites)?))
    }

    /// Shorthand: single-site X term.
    pub fn x(site: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(site, PauliOp::X)]))
    }

    /// Shorthand: single-site Y term.
    pub fn y(site: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(site, PauliOp::Y)]))
    }

    /// Shorthand: single-site Z term.
    pub fn z(site: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(site, PauliOp::Z)]))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(s0: u32, s1: u32, coeff: f64) -> Self {
        Self::new(
            coeff,
            PauliString::from_ops([(s0, PauliOp::Z), (s1, PauliOp::Z)]),
        )
    }
}

/// A sum-of-Pauli-strings Hamiltonian on a fixed-width spin chain.
///
/// H = Σ_k  c_k · P_k
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<WeightedTerm>,
    num_sites: u32,
}

impl Hamiltonian {
    /// Assemble a Hamiltonian, validating every term against the chain width.
    ///
    /// Fails if `num_sites` is 0 (or above the representable maximum of 63),
    /// if any term references a site outside `[0, num_sites)`, or if a site
    /// appears more than once within one term.
    pub fn new(terms: Vec<WeightedTerm>, num_sites: u32) -> HamResult<Self> {
        if num_sites == 0 || num_sites > 63 {
            return Err(HamError::InvalidSiteCount(num_sites));
        }
        for term in &terms {
            // Ops are sorted, so duplicates are adjacent.
            let mut prev = None;
            for &(site, _) in term.string.ops() {
                if site >= num_sites {
                    return Err(HamError::SiteOutOfRange { site, num_sites });
                }
                if prev == Some(site) {
                    return Err(HamError::DuplicateSite(site));
                }
                prev = Some(site);
            }
        }
        Ok(Self { terms, num_sites })
    }

    /// All terms, in input order.
    pub fn terms(&self) -> &[WeightedTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Chain width.
    pub fn num_sites(&self) -> u32 {
        self.num_sites
    }

    /// State-space dimension `2^num_sites`.
    pub fn dim(&self) -> usize {
        1usize << self.num_sites
    }

    /// Spectral norm upper bound: Σ |c_k| (used by QDrift).
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.norm()).sum()
    }

    /// Merge terms with identical Pauli strings, summing coefficients, and
    /// drop merged terms whose coefficient magnitude is at most `tol`.
    ///
    /// First-occurrence order is preserved; the numerical action of the
    /// operator is unchanged.
    pub fn simplify(&self, tol: f64) -> Hamiltonian {
        let mut slot: FxHashMap<&PauliString, usize> = FxHashMap::default();
        let mut merged: Vec<WeightedTerm> = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match slot.get(&term.string) {
                Some(&i) => merged[i].coeff += term.coeff,
                None => {
                    slot.insert(&term.string, merged.len());
                    merged.push(term.clone());
                }
            }
        }
        merged.retain(|t| t.coeff.norm() > tol);
        Hamiltonian {
            terms: merged,
            num_sites: self.num_sites,
        }
    }

    /// Materialize the full `2^num_sites × 2^num_sites` matrix.
    ///
    /// Each term contributes `coeff · α(b)` at `(b ⊕ x_mask, b)` for every
    /// basis column `b`, via the mask factorization of its string.  The cost
    /// is exponential in the chain width — this exists for the exact
    /// reference evolver and small-scale checks only, and is infeasible much
    /// beyond 14 sites.
    pub fn to_dense(&self) -> Array2<Complex64> {
        if self.num_sites > DENSE_WARN_SITES {
            warn!(
                num_sites = self.num_sites,
                "dense materialization is exponential in the chain width"
            );
        }
        let dim = self.dim();
        let mut matrix = Array2::zeros((dim, dim));
        for term in &self.terms {
            let masks = term.string.masks();
            for col in 0..dim {
                let row = col ^ masks.x_mask;
                matrix[[row, col]] += term.coeff * masks.phase(col);
            }
        }
        matrix
    }
}
