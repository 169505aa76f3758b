//! Tests for QDrift stochastic evolution.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rimfax_evolve::{
    EvolutionProblem, EvolveError, QDriftEvolution, Statevector, evolve_exact,
};
use rimfax_ham::{Hamiltonian, WeightedTerm};

fn tfim2() -> Hamiltonian {
    Hamiltonian::new(
        vec![
            WeightedTerm::zz(0, 1, -1.0),
            WeightedTerm::x(0, -1.0),
            WeightedTerm::x(1, -1.0),
        ],
        2,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_samples_returns_error() {
    let problem = EvolutionProblem::new(tfim2(), Statevector::zero(2), 1.0).unwrap();
    let qdrift = QDriftEvolution::new(problem, 0);
    assert!(matches!(
        qdrift.run_with_rng(StdRng::seed_from_u64(0)),
        Err(EvolveError::InvalidSamples(0))
    ));
}

#[test]
fn empty_hamiltonian_returns_error() {
    let h = Hamiltonian::new(vec![], 2).unwrap();
    let problem = EvolutionProblem::new(h, Statevector::zero(2), 1.0).unwrap();
    let qdrift = QDriftEvolution::new(problem, 10);
    assert!(matches!(
        qdrift.run_with_rng(StdRng::seed_from_u64(0)),
        Err(EvolveError::EmptyHamiltonian)
    ));
}

// ---------------------------------------------------------------------------
// Behaviour
// ---------------------------------------------------------------------------

#[test]
fn zero_lambda_returns_initial_state() {
    let h = Hamiltonian::new(vec![WeightedTerm::z(0, 0.0)], 2).unwrap();
    let initial = Statevector::from_bitstring("01").unwrap();
    let problem = EvolutionProblem::new(h, initial.clone(), 1.0).unwrap();
    let state = QDriftEvolution::new(problem, 50)
        .run_with_rng(StdRng::seed_from_u64(1))
        .unwrap();
    assert!((state.inner(&initial).norm() - 1.0).abs() < 1e-12);
}

#[test]
fn seeded_runs_are_reproducible() {
    let problem = EvolutionProblem::new(tfim2(), Statevector::zero(2), 0.5).unwrap();
    let qdrift = QDriftEvolution::new(problem, 200);
    let a = qdrift.run_with_rng(StdRng::seed_from_u64(42)).unwrap();
    let b = qdrift.run_with_rng(StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.amplitudes(), b.amplitudes());
}

#[test]
fn preserves_norm() {
    let problem = EvolutionProblem::new(tfim2(), Statevector::zero(2), 1.0).unwrap();
    let state = QDriftEvolution::new(problem, 500)
        .run_with_rng(StdRng::seed_from_u64(7))
        .unwrap();
    assert!((state.norm() - 1.0).abs() < 1e-9);
}

#[test]
fn many_samples_approach_the_oracle() {
    // λ = 3, t = 0.4: channel error O(λ²t²/N) is well below the threshold at
    // N = 4000, and the seed makes the run deterministic.
    let problem = EvolutionProblem::new(tfim2(), Statevector::zero(2), 0.4).unwrap();
    let exact = &evolve_exact(&problem, &[0.4]).unwrap()[0];
    let state = QDriftEvolution::new(problem.clone(), 4000)
        .run_with_rng(StdRng::seed_from_u64(3))
        .unwrap();
    let fidelity = state.inner(exact).norm_sqr();
    assert!(fidelity >= 0.95, "fidelity {fidelity} below 0.95");
}
