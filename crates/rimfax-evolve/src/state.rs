//! Dense statevector engine for spin chains.
//!
//! Amplitudes are stored as `2^num_sites` complex numbers; basis index bit
//! `q` holds the state of site `q`, so site 0 is the least-significant bit.
//! Elementary Pauli exponentials are applied in closed form,
//!
//!   exp(-i·θ·P) = cos θ · I − i sin θ · P,
//!
//! which holds for any Pauli string because P² = I, so every factor of a
//! product formula is applied exactly — the only approximation in a
//! Trotterized run is the formula itself.

use num_complex::Complex64;
use rimfax_ham::{Hamiltonian, PauliString};
use serde::{Deserialize, Serialize};

use crate::error::{EvolveError, EvolveResult};

/// Norm tolerance accepted by [`Statevector::from_amplitudes`].
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A pure state of a spin chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statevector {
    /// The state amplitudes (2^num_sites complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of chain sites.
    num_sites: u32,
}

impl Statevector {
    /// The all-zeros computational basis state |0...0⟩.
    pub fn zero(num_sites: u32) -> Self {
        Self::basis(num_sites, 0)
    }

    /// The computational basis state |index⟩.
    ///
    /// # Panics
    /// Panics if `index >= 2^num_sites`.
    pub fn basis(num_sites: u32, index: usize) -> Self {
        let dim = 1usize << num_sites;
        assert!(
            index < dim,
            "basis index {index} out of range for {num_sites} sites"
        );
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_sites,
        }
    }

    /// Basis state from a bitstring, leftmost character = site 0.
    ///
    /// `"10"` is the 2-site state with site 0 up and site 1 down.
    pub fn from_bitstring(bits: &str) -> EvolveResult<Self> {
        if bits.is_empty() || bits.len() > 63 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(EvolveError::InvalidBitstring(bits.to_string()));
        }
        let mut index = 0usize;
        for (site, b) in bits.bytes().enumerate() {
            if b == b'1' {
                index |= 1 << site;
            }
        }
        Ok(Self::basis(bits.len() as u32, index))
    }

    /// Build a state from raw amplitudes.
    ///
    /// The vector length must be a power of two ≥ 2 and the norm must be 1
    /// within [`NORM_TOLERANCE`].
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> EvolveResult<Self> {
        let dim = amplitudes.len();
        if dim < 2 || !dim.is_power_of_two() {
            return Err(EvolveError::DimensionMismatch {
                expected: dim.max(2).next_power_of_two(),
                got: dim,
            });
        }
        let state = Self {
            amplitudes,
            num_sites: dim.trailing_zeros(),
        };
        let norm = state.norm();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(EvolveError::NotNormalized { norm });
        }
        Ok(state)
    }

    /// Internal constructor for amplitudes already known to be consistent.
    pub(crate) fn from_raw(amplitudes: Vec<Complex64>, num_sites: u32) -> Self {
        debug_assert_eq!(amplitudes.len(), 1usize << num_sites);
        Self {
            amplitudes,
            num_sites,
        }
    }

    /// Number of chain sites.
    pub fn num_sites(&self) -> u32 {
        self.num_sites
    }

    /// State-space dimension `2^num_sites`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The raw amplitudes, basis-ordered.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Euclidean norm |ψ|.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Probability of measuring the computational basis state |index⟩.
    ///
    /// # Panics
    /// Panics if `index >= 2^num_sites`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Inner product ⟨self|other⟩.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn inner(&self, other: &Self) -> Complex64 {
        assert_eq!(self.dim(), other.dim(), "statevector dimensions differ");
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Apply `exp(-i·angle·P)` in place.
    ///
    /// Complex angles are accepted (the algebra is unchanged); real angles
    /// give a unitary update.  An identity string applies the global phase
    /// `e^{-i·angle}`, so composed factors agree with the dense propagator
    /// including phase.
    pub fn apply_exp_pauli(&mut self, string: &PauliString, angle: Complex64) {
        let masks = string.masks();
        let cos = angle.cos();
        let neg_i_sin = Complex64::new(0.0, -1.0) * angle.sin();
        let dim = self.amplitudes.len();

        if masks.x_mask == 0 {
            // Diagonal string: each amplitude picks up cos θ − i sin θ·(±1).
            for i in 0..dim {
                self.amplitudes[i] *= cos + neg_i_sin * masks.phase(i);
            }
            return;
        }

        for i in 0..dim {
            let j = i ^ masks.x_mask;
            if i < j {
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = cos * a + neg_i_sin * masks.phase(j) * b;
                self.amplitudes[j] = cos * b + neg_i_sin * masks.phase(i) * a;
            }
        }
    }

    /// Expectation value ⟨ψ|O|ψ⟩ of a weighted-Pauli operator.
    ///
    /// Hermitian operators (real coefficients) yield a real value up to
    /// numerical error; callers tracking observables take the real part.
    pub fn expectation(&self, op: &Hamiltonian) -> EvolveResult<Complex64> {
        let expected = op.dim();
        if expected != self.dim() {
            return Err(EvolveError::DimensionMismatch {
                expected,
                got: self.dim(),
            });
        }
        let mut acc = Complex64::new(0.0, 0.0);
        for term in op.terms() {
            let masks = term.string.masks();
            let mut overlap = Complex64::new(0.0, 0.0);
            for i in 0..self.amplitudes.len() {
                let j = i ^ masks.x_mask;
                overlap += self.amplitudes[j].conj() * masks.phase(i) * self.amplitudes[i];
            }
            acc += term.coeff * overlap;
        }
        Ok(acc)
    }
}
