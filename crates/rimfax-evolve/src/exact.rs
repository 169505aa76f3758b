//! Exact dense-matrix reference evolution.
//!
//! Computes `ψ(t) = expm(-i·t·H) · ψ(0)` by materializing the full
//! Hamiltonian and exponentiating it with scaling-and-squaring over a
//! truncated Taylor series.  Memory and time grow as 4^num_sites, so this
//! path is a correctness oracle for small chains, not a production evolver;
//! a cooperative wall-clock deadline can be attached for that reason.

use std::time::{Duration, Instant};

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::debug;

use crate::error::{EvolveError, EvolveResult};
use crate::state::Statevector;
use crate::trotter::EvolutionProblem;

/// Taylor terms are accumulated until their 1-norm drops below this.
const TAYLOR_TOLERANCE: f64 = 1e-16;

/// Hard cap on Taylor terms per exponential.
const MAX_TAYLOR_TERMS: usize = 64;

/// Dense-matrix exact evolution driver.
pub struct ExactEvolution {
    problem: EvolutionProblem,
    deadline: Option<Duration>,
}

impl ExactEvolution {
    /// Construct an exact evolver for the problem.
    pub fn new(problem: EvolutionProblem) -> Self {
        Self {
            problem,
            deadline: None,
        }
    }

    /// Abort with [`EvolveError::DeadlineExceeded`] once this much wall-clock
    /// time has elapsed.  Checked cooperatively between dense-matrix
    /// operations.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Evolve the initial state exactly to each requested time.
    ///
    /// Sample times must be finite and non-negative; they are processed in
    /// input order.  The problem's `total_time` plays no role here.
    pub fn sample(&self, sample_times: &[f64]) -> EvolveResult<Vec<Statevector>> {
        for &t in sample_times {
            if !t.is_finite() || t < 0.0 {
                return Err(EvolveError::InvalidTime(t));
            }
        }
        let started = Instant::now();
        let num_sites = self.problem.hamiltonian().num_sites();
        debug!(
            num_sites,
            n_times = sample_times.len(),
            "running dense reference evolution"
        );

        let h = self.problem.hamiltonian().to_dense();
        let psi0 = Array1::from(self.problem.initial_state().amplitudes().to_vec());

        let mut states = Vec::with_capacity(sample_times.len());
        for &t in sample_times {
            // A = -i·t·H
            let a = h.mapv(|z| z * Complex64::new(0.0, -t));
            let u = expm(&a, &mut || self.check_deadline(started))?;
            let psi = u.dot(&psi0);
            states.push(Statevector::from_raw(psi.to_vec(), num_sites));
        }
        Ok(states)
    }

    fn check_deadline(&self, started: Instant) -> EvolveResult<()> {
        match self.deadline {
            Some(limit) if started.elapsed() >= limit => Err(EvolveError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

/// Evolve `problem`'s initial state exactly to each sample time.
pub fn evolve_exact(
    problem: &EvolutionProblem,
    sample_times: &[f64],
) -> EvolveResult<Vec<Statevector>> {
    ExactEvolution::new(problem.clone()).sample(sample_times)
}

/// Matrix exponential by scaling-and-squaring over a truncated Taylor
/// series.  Adequate for the small dimensions this oracle targets; `tick`
/// is invoked before every matrix product so callers can enforce deadlines.
fn expm(
    a: &Array2<Complex64>,
    tick: &mut dyn FnMut() -> EvolveResult<()>,
) -> EvolveResult<Array2<Complex64>> {
    let dim = a.nrows();
    let norm = one_norm(a);
    // Scale until the 1-norm is at most 1/2, then square back up.
    let squarings = if norm > 0.5 {
        (norm / 0.5).log2().ceil() as u32
    } else {
        0
    };
    let scale = 2.0_f64.powi(squarings as i32);
    let scaled = a.mapv(|z| z / scale);

    let mut result: Array2<Complex64> = Array2::eye(dim);
    let mut power: Array2<Complex64> = Array2::eye(dim);
    for k in 1..=MAX_TAYLOR_TERMS {
        tick()?;
        power = power.dot(&scaled).mapv(|z| z / k as f64);
        result += &power;
        if one_norm(&power) < TAYLOR_TOLERANCE {
            break;
        }
    }
    for _ in 0..squarings {
        tick()?;
        result = result.dot(&result);
    }
    Ok(result)
}

/// Maximum absolute column sum.
fn one_norm(a: &Array2<Complex64>) -> f64 {
    let mut max = 0.0_f64;
    for column in a.columns() {
        let sum: f64 = column.iter().map(|z| z.norm()).sum();
        max = max.max(sum);
    }
    max
}
