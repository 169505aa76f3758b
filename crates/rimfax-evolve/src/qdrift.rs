//! QDrift stochastic product-formula evolution.
//!
//! QDrift (Campbell 2019) approximates `exp(-i H t)` by randomly sampling
//! Hamiltonian terms with probability proportional to their coefficient
//! magnitudes, rather than applying all terms uniformly.
//!
//! Algorithm:
//!   λ = Σ |c_k|
//!   τ = λ t / N                 (angle per sample)
//!   For j = 1..N:
//!     Draw index k with p_k = |c_k| / λ
//!     Apply exp(-i · (c_k/|c_k|) · τ · P_k)
//!
//! For real coefficients `c_k/|c_k|` is `sign(c_k)`.  Error (in diamond
//! norm): O(λ² t² / N).
//!
//! # Reference
//! E. Campbell, "Random Compiler for Fast Hamiltonian Simulation",
//! PRL 123, 070503 (2019). <https://doi.org/10.1103/PhysRevLett.123.070503>

use rand::Rng;
use tracing::debug;

use crate::error::{EvolveError, EvolveResult};
use crate::state::Statevector;
use crate::trotter::EvolutionProblem;

/// QDrift stochastic time-evolution driver.
pub struct QDriftEvolution {
    problem: EvolutionProblem,
    /// Number of random samples N.
    n_samples: usize,
}

impl QDriftEvolution {
    /// Construct a new QDrift driver.
    ///
    /// # Arguments
    /// * `problem`   — Hamiltonian, initial state and total time t
    /// * `n_samples` — number of random channel samples N (higher → more accurate)
    pub fn new(problem: EvolutionProblem, n_samples: usize) -> Self {
        Self { problem, n_samples }
    }

    /// Evolve using the given random number generator.
    ///
    /// Seeding `rng` makes the run reproducible:
    /// ```rust,ignore
    /// use rand::SeedableRng;
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let state = qdrift.run_with_rng(rng)?;
    /// ```
    pub fn run_with_rng<R: Rng>(&self, mut rng: R) -> EvolveResult<Statevector> {
        if self.n_samples == 0 {
            return Err(EvolveError::InvalidSamples(0));
        }
        let hamiltonian = self.problem.hamiltonian();
        if hamiltonian.n_terms() == 0 {
            return Err(EvolveError::EmptyHamiltonian);
        }

        let mut state = self.problem.initial_state().clone();
        let lambda = hamiltonian.lambda();
        if lambda == 0.0 {
            // All coefficients zero — the evolution is trivial.
            return Ok(state);
        }

        // Angle per sample: τ = λ t / N
        let tau = lambda * self.problem.total_time() / self.n_samples as f64;
        debug!(
            n_terms = hamiltonian.n_terms(),
            n_samples = self.n_samples,
            lambda,
            tau,
            "running QDrift evolution"
        );

        let weights: Vec<f64> = hamiltonian
            .terms()
            .iter()
            .map(|t| t.coeff.norm() / lambda)
            .collect();

        for _ in 0..self.n_samples {
            let k = sample_index(&weights, &mut rng);
            let term = &hamiltonian.terms()[k];
            let magnitude = term.coeff.norm();
            if magnitude == 0.0 {
                // Unreachable through sampling except by CDF rounding.
                continue;
            }
            // Each sample applies exp(-i · (c_k/|c_k|) · τ · P_k), so the
            // expected generator per sample is (t/N)·H.
            let angle = term.coeff / magnitude * tau;
            state.apply_exp_pauli(&term.string, angle);
        }
        Ok(state)
    }

    /// Evolve using the thread-local RNG.
    pub fn run(&self) -> EvolveResult<Statevector> {
        self.run_with_rng(rand::thread_rng())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Sample an index from a normalised probability distribution (CDF method).
fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let u: f64 = rng.r#gen();
    let mut cumsum = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumsum += w;
        if u < cumsum {
            return i;
        }
    }
    // Floating-point rounding: return last index.
    weights.len() - 1
}
