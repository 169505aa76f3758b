//! Trotter-Suzuki product-formula synthesis.
//!
//! Emits the ordered sequence of elementary exponential factors whose
//! composition approximates the single-step propagator `exp(-i H dt)` for a
//! sum-of-Paulis Hamiltonian.
//!
//! # First order (Lie-Trotter)
//!
//!   S₁(dt) = ∏_k exp(-i c_k P_k dt)
//!
//! Per-step error: O(dt²).
//!
//! # Second order (Suzuki-Trotter)
//!
//!   S₂(dt) = exp(-i c₁ P₁ dt/2) ··· exp(-i c_n P_n dt) ··· exp(-i c₁ P₁ dt/2)
//!
//! A forward half-sweep, the final term taking a full step, then the
//! mirrored half-sweep.  Per-step error: O(dt³).
//!
//! # Order 2k, k > 1 (recursive Suzuki)
//!
//!   S_{2k}(dt) = S_{2k-2}(u·dt)² · S_{2k-2}((1-4u)·dt) · S_{2k-2}(u·dt)²
//!   u = 1 / (4 − 4^{1/(2k−1)})
//!
//! Synthesis is a pure function of (term list, dt, order): deterministic,
//! side-effect-free, and independent of any evolution run.

use num_complex::Complex64;
use rimfax_ham::Hamiltonian;

use crate::error::{EvolveError, EvolveResult};

/// One elementary exponential factor `exp(-i·angle·P)` of a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpFactor {
    /// Index of the Hamiltonian term supplying the Pauli string.
    pub term_index: usize,
    /// Rotation angle: `coeff · dt · fraction`.
    pub angle: Complex64,
}

/// Synthesize the factor sequence approximating `exp(-i H dt)` at the given
/// product-formula order.
///
/// Supported orders are 1 and every even integer ≥ 2.  For every term the
/// emitted fractions sum to 1, so the summed angle per term equals
/// `coeff · dt` at any order.
pub fn synthesize_step(
    hamiltonian: &Hamiltonian,
    dt: f64,
    order: u32,
) -> EvolveResult<Vec<ExpFactor>> {
    validate_order(order)?;
    if hamiltonian.n_terms() == 0 {
        return Err(EvolveError::EmptyHamiltonian);
    }
    let terms = hamiltonian.terms();
    Ok(fractions(order, terms.len())
        .into_iter()
        .map(|(term_index, fraction)| ExpFactor {
            term_index,
            angle: terms[term_index].coeff * (dt * fraction),
        })
        .collect())
}

/// Reject order 0 and odd orders above 1.
pub(crate) fn validate_order(order: u32) -> EvolveResult<()> {
    if order == 1 || (order >= 2 && order % 2 == 0) {
        Ok(())
    } else {
        Err(EvolveError::UnsupportedOrder(order))
    }
}

/// The (term index, dt fraction) sequence for one step, `order` validated.
fn fractions(order: u32, n_terms: usize) -> Vec<(usize, f64)> {
    match order {
        1 => (0..n_terms).map(|k| (k, 1.0)).collect(),
        2 => second_order(n_terms),
        _ => {
            // u = 1 / (4 − 4^{1/(2k−1)}) with order = 2k.
            let u = 1.0 / (4.0 - 4.0_f64.powf(1.0 / (f64::from(order) - 1.0)));
            let inner = fractions(order - 2, n_terms);
            let mut seq = Vec::with_capacity(5 * inner.len());
            for &(k, f) in inner.iter().chain(inner.iter()) {
                seq.push((k, u * f));
            }
            for &(k, f) in &inner {
                seq.push((k, (1.0 - 4.0 * u) * f));
            }
            for &(k, f) in inner.iter().chain(inner.iter()) {
                seq.push((k, u * f));
            }
            seq
        }
    }
}

/// Symmetric half-sweep / full middle / mirrored half-sweep.
fn second_order(n_terms: usize) -> Vec<(usize, f64)> {
    let mut seq = Vec::with_capacity(2 * n_terms - 1);
    for k in 0..n_terms - 1 {
        seq.push((k, 0.5));
    }
    seq.push((n_terms - 1, 1.0));
    for k in (0..n_terms - 1).rev() {
        seq.push((k, 0.5));
    }
    seq
}
