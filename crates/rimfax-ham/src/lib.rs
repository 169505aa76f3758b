//! `rimfax-ham` — weighted-Pauli operator model for spin chains.
//!
//! Represents a Hamiltonian as a sum of complex-weighted Pauli strings on a
//! fixed-width chain, validated at assembly time.  The model is the common
//! input of every Rimfax evolution backend: the product-formula synthesizer
//! consumes the term list directly, and the exact reference evolver
//! materializes it with [`Hamiltonian::to_dense`].
//!
//! # Quick start
//!
//! ```rust
//! use rimfax_ham::{Hamiltonian, WeightedTerm};
//!
//! // Transverse-field Ising chain: H = -J·Z₀Z₁ - h·(X₀ + X₁)
//! let h = Hamiltonian::new(
//!     vec![
//!         WeightedTerm::zz(0, 1, -0.2),
//!         WeightedTerm::x(0, -1.0),
//!         WeightedTerm::x(1, -1.0),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! assert_eq!(h.num_sites(), 2);
//! assert!((h.lambda() - 2.2).abs() < 1e-12);
//! ```

pub mod error;
pub mod hamiltonian;
pub mod pauli;

pub use error::{HamError, HamResult};
pub use hamiltonian::{Hamiltonian, WeightedTerm};
pub use pauli::{PauliMasks, PauliOp, PauliString};
