//! Trotterized statevector time evolution.
//!
//! Splits `exp(-i H t)` into `num_steps` uniform slices, synthesizes the
//! per-step factor sequence once (factors scale linearly with `dt`, so no
//! per-step resynthesis is needed) and applies it repeatedly to a working
//! copy of the initial state, optionally recording observable expectation
//! values after every step.
//!
//! Global error: O(t²/n) at order 1, O(t³/n²) at order 2, and O(dt^{2k+1})
//! per step for the recursive order-2k formulas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rimfax_ham::Hamiltonian;

use crate::error::{EvolveError, EvolveResult};
use crate::formula::synthesize_step;
use crate::state::Statevector;

/// An immutable evolution problem: Hamiltonian, initial state, total time
/// and the observables tracked along the trajectory.
#[derive(Debug, Clone)]
pub struct EvolutionProblem {
    hamiltonian: Hamiltonian,
    initial_state: Statevector,
    total_time: f64,
    observables: Vec<Hamiltonian>,
}

impl EvolutionProblem {
    /// Construct a problem, validating the state dimension against the
    /// Hamiltonian's chain width and the time for finiteness and sign.
    pub fn new(
        hamiltonian: Hamiltonian,
        initial_state: Statevector,
        total_time: f64,
    ) -> EvolveResult<Self> {
        if !total_time.is_finite() || total_time < 0.0 {
            return Err(EvolveError::InvalidTime(total_time));
        }
        let expected = hamiltonian.dim();
        if initial_state.dim() != expected {
            return Err(EvolveError::DimensionMismatch {
                expected,
                got: initial_state.dim(),
            });
        }
        Ok(Self {
            hamiltonian,
            initial_state,
            total_time,
            observables: Vec::new(),
        })
    }

    /// Attach observables whose expectation values are recorded after every
    /// step.  Each must act on the same chain width as the Hamiltonian.
    pub fn with_observables(mut self, observables: Vec<Hamiltonian>) -> EvolveResult<Self> {
        let expected = self.hamiltonian.dim();
        for observable in &observables {
            if observable.dim() != expected {
                return Err(EvolveError::DimensionMismatch {
                    expected,
                    got: observable.dim(),
                });
            }
        }
        self.observables = observables;
        Ok(self)
    }

    /// The Hamiltonian generating the evolution.
    pub fn hamiltonian(&self) -> &Hamiltonian {
        &self.hamiltonian
    }

    /// The initial state (never mutated by an evolution run).
    pub fn initial_state(&self) -> &Statevector {
        &self.initial_state
    }

    /// Total evolution time t.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// The tracked observables.
    pub fn observables(&self) -> &[Hamiltonian] {
        &self.observables
    }
}

/// One recorded trajectory row: elapsed time plus one real expectation value
/// per configured observable, in observable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Elapsed evolution time.
    pub time: f64,
    /// Re⟨ψ(t)|O_j|ψ(t)⟩ for each observable j.
    pub values: Vec<f64>,
}

/// The outcome of an evolution run.  Owned by the caller; `final_state` is a
/// fresh snapshot, not an alias into working storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// State after the last step.
    pub final_state: Statevector,
    /// Expectation-value rows, starting with the t = 0 row; empty when the
    /// problem has no observables.
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Trotter product-formula time-evolution driver.
pub struct TrotterEvolution {
    problem: EvolutionProblem,
    /// Number of Trotter steps (repetitions).
    num_steps: usize,
    /// Product-formula order: 1 or any even integer.
    order: u32,
}

impl TrotterEvolution {
    /// Construct a driver with the default first-order formula.
    pub fn new(problem: EvolutionProblem, num_steps: usize) -> Self {
        Self {
            problem,
            num_steps,
            order: 1,
        }
    }

    /// Select the product-formula order (1 or any even integer ≥ 2).
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Run the evolution.
    ///
    /// All validation happens before the working state is touched; a failed
    /// run observes no partial results.
    pub fn run(&self) -> EvolveResult<EvolutionResult> {
        if self.num_steps == 0 {
            return Err(EvolveError::InvalidSteps(0));
        }
        let problem = &self.problem;
        let dt = problem.total_time / self.num_steps as f64;
        let factors = synthesize_step(&problem.hamiltonian, dt, self.order)?;

        debug!(
            n_terms = problem.hamiltonian.n_terms(),
            num_steps = self.num_steps,
            order = self.order,
            num_sites = problem.hamiltonian.num_sites(),
            "running Trotterized evolution"
        );

        let terms = problem.hamiltonian.terms();
        let mut state = problem.initial_state.clone();
        let mut trajectory = Vec::new();
        if !problem.observables.is_empty() {
            // t = 0 row uses the initial state, before the first step.
            trajectory.push(record(&state, &problem.observables, 0.0)?);
        }
        for step in 1..=self.num_steps {
            for factor in &factors {
                state.apply_exp_pauli(&terms[factor.term_index].string, factor.angle);
            }
            if !problem.observables.is_empty() {
                trajectory.push(record(&state, &problem.observables, step as f64 * dt)?);
            }
        }
        Ok(EvolutionResult {
            final_state: state,
            trajectory,
        })
    }
}

fn record(
    state: &Statevector,
    observables: &[Hamiltonian],
    time: f64,
) -> EvolveResult<TrajectoryPoint> {
    let mut values = Vec::with_capacity(observables.len());
    for observable in observables {
        values.push(state.expectation(observable)?.re);
    }
    Ok(TrajectoryPoint { time, values })
}

/// Evolve `problem` over `num_steps` uniform Trotter steps at the given
/// product-formula order.
pub fn evolve(
    problem: &EvolutionProblem,
    num_steps: usize,
    order: u32,
) -> EvolveResult<EvolutionResult> {
    TrotterEvolution::new(problem.clone(), num_steps)
        .with_order(order)
        .run()
}
