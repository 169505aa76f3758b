//! `rimfax-evolve` — Trotterized statevector time evolution.
//!
//! Approximates `exp(-i H t)` for a sum-of-Paulis spin-chain Hamiltonian
//! using:
//!
//! - **Trotter-Suzuki** product formulas (first order, second order, and the
//!   recursive even orders 2k)
//! - **QDrift** randomised product formula (Campbell 2019)
//!
//! Factors are applied directly to a dense statevector via the closed-form
//! Pauli exponential, so the only approximation is the product formula
//! itself.  A dense matrix-exponential reference evolver
//! ([`exact::ExactEvolution`]) serves as the correctness oracle for small
//! chains.
//!
//! # Quick start
//!
//! ```rust
//! use rimfax_evolve::{EvolutionProblem, Statevector, TrotterEvolution};
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
//! let problem = EvolutionProblem::new(h, Statevector::zero(2), 1.0).unwrap();
//! let result = TrotterEvolution::new(problem, 100).with_order(2).run().unwrap();
//! assert!((result.final_state.norm() - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod exact;
pub mod formula;
pub mod qdrift;
pub mod state;
pub mod trotter;

pub use error::{EvolveError, EvolveResult};
pub use exact::{ExactEvolution, evolve_exact};
pub use formula::{ExpFactor, synthesize_step};
pub use qdrift::QDriftEvolution;
pub use state::Statevector;
pub use trotter::{EvolutionProblem, EvolutionResult, TrajectoryPoint, TrotterEvolution, evolve};
