//! Single-site Pauli operators and tensor-product strings.
//!
//! A [`PauliString`] is a tensor product of single-site Pauli operators
//! acting on a subset of chain sites; sites not listed carry the identity.
//! Every string factors as
//!
//!   P = i^y · X(x_mask) · Z(z_mask)
//!
//! where `x_mask` collects the bit-flip sites (X and Y), `z_mask` the phase
//! sites (Z and Y) and `y` counts the Y factors.  The factorization is what
//! both the statevector engine and dense materialization consume: acting on
//! a computational basis state it gives
//!
//!   P|b⟩ = i^y · (−1)^popcount(b ∧ z_mask) · |b ⊕ x_mask⟩

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{HamError, HamResult};

/// Single-site Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity — contributes a global phase; omitted from strings.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Parse an operator symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> HamResult<Self> {
        match symbol.to_ascii_uppercase() {
            'I' => Ok(Self::I),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(HamError::UnknownSymbol(symbol)),
        }
    }

    /// The canonical upper-case symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::I => 'I',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

/// A tensor product of Pauli operators on named sites.
///
/// Stored as a sorted `Vec<(site_index, PauliOp)>` with identity factors
/// omitted.  Sites not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by site index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Construct a PauliString from an iterator of (site, op) pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by site.
    /// Duplicate sites are not rejected here — [`crate::Hamiltonian::new`]
    /// validates terms when a Hamiltonian is assembled.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(site, _)| *site);
        Self { ops: v }
    }

    /// Construct from an operator label such as `"XZ"` plus the sites each
    /// symbol acts on.
    ///
    /// Fails if the label and site list disagree in length or the label
    /// contains an unknown symbol.
    pub fn from_labels(labels: &str, sites: &[u32]) -> HamResult<Self> {
        let n_labels = labels.chars().count();
        if n_labels != sites.len() {
            return Err(HamError::LabelLengthMismatch {
                labels: n_labels,
                sites: sites.len(),
            });
        }
        let mut ops = Vec::with_capacity(n_labels);
        for (symbol, &site) in labels.chars().zip(sites) {
            ops.push((site, PauliOp::from_symbol(symbol)?));
        }
        Ok(Self::from_ops(ops))
    }

    /// Construct a Z⊗Z⊗...⊗Z string spanning the given sites.
    pub fn zz(sites: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(sites.into_iter().map(|s| (s, PauliOp::Z)))
    }

    /// The non-identity (site, op) pairs, sorted by site index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// True if there are no non-identity operators (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest site index referenced, or `None` for an identity string.
    pub fn max_site(&self) -> Option<u32> {
        self.ops.last().map(|(site, _)| *site)
    }

    /// The `i^y · X(x) · Z(z)` factorization of this string.
    pub fn masks(&self) -> PauliMasks {
        let mut masks = PauliMasks {
            x_mask: 0,
            z_mask: 0,
            y_count: 0,
        };
        for &(site, op) in &self.ops {
            let bit = 1usize << site;
            match op {
                PauliOp::X => masks.x_mask |= bit,
                PauliOp::Y => {
                    masks.x_mask |= bit;
                    masks.z_mask |= bit;
                    masks.y_count += 1;
                }
                PauliOp::Z => masks.z_mask |= bit,
                PauliOp::I => {}
            }
        }
        masks
    }
}

/// Bitmask factorization of a [`PauliString`] over computational basis
/// indices: `P = i^y_count · X(x_mask) · Z(z_mask)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauliMasks {
    /// Sites flipped by the string (X and Y factors).
    pub x_mask: usize,
    /// Sites contributing a parity phase (Z and Y factors).
    pub z_mask: usize,
    /// Number of Y factors.
    pub y_count: u32,
}

impl PauliMasks {
    /// The amplitude α(b) in `P|b⟩ = α(b)·|b ⊕ x_mask⟩`.
    pub fn phase(&self, basis: usize) -> Complex64 {
        let i_pow = match self.y_count % 4 {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        };
        if (basis & self.z_mask).count_ones() % 2 == 1 {
            -i_pow
        } else {
            i_pow
        }
    }
}
