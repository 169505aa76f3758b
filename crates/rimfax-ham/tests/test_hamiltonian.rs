//! Tests for the Hamiltonian operator model.

use num_complex::Complex64;
use rimfax_ham::{HamError, Hamiltonian, PauliOp, PauliString, WeightedTerm};

fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-12
}

// ---------------------------------------------------------------------------
// PauliString
// ---------------------------------------------------------------------------

#[test]
fn pauli_string_drops_identity() {
    let ps = PauliString::from_ops([(0, PauliOp::I), (1, PauliOp::Z)]);
    assert_eq!(ps.ops(), &[(1, PauliOp::Z)]);
}

#[test]
fn pauli_string_sorted_by_site() {
    let ps = PauliString::from_ops([(3, PauliOp::X), (1, PauliOp::Z), (0, PauliOp::Y)]);
    let sites: Vec<u32> = ps.ops().iter().map(|(s, _)| *s).collect();
    assert_eq!(sites, vec![0, 1, 3]);
}

#[test]
fn pauli_string_identity_is_empty() {
    let ps = PauliString::from_ops(std::iter::empty());
    assert!(ps.is_identity());
    assert_eq!(ps.max_site(), None);
}

#[test]
fn pauli_string_from_labels() {
    let ps = PauliString::from_labels("xZ", &[2, 0]).unwrap();
    assert_eq!(ps.ops(), &[(0, PauliOp::Z), (2, PauliOp::X)]);
}

#[test]
fn pauli_string_label_length_mismatch() {
    assert!(matches!(
        PauliString::from_labels("XYZ", &[0, 1]),
        Err(HamError::LabelLengthMismatch { labels: 3, sites: 2 })
    ));
}

#[test]
fn pauli_string_unknown_symbol() {
    assert!(matches!(
        PauliString::from_labels("XQ", &[0, 1]),
        Err(HamError::UnknownSymbol('Q'))
    ));
}

#[test]
fn pauli_masks_factorization() {
    // Y₀ ⊗ X₁ ⊗ Z₂: x_mask = 0b011, z_mask = 0b101, one Y factor.
    let ps = PauliString::from_labels("YXZ", &[0, 1, 2]).unwrap();
    let masks = ps.masks();
    assert_eq!(masks.x_mask, 0b011);
    assert_eq!(masks.z_mask, 0b101);
    assert_eq!(masks.y_count, 1);
}

#[test]
fn pauli_masks_phase_single_y() {
    // Y|0⟩ = i|1⟩,  Y|1⟩ = -i|0⟩
    let masks = PauliString::from_labels("Y", &[0]).unwrap().masks();
    assert!(approx_eq(masks.phase(0), Complex64::new(0.0, 1.0)));
    assert!(approx_eq(masks.phase(1), Complex64::new(0.0, -1.0)));
}

// ---------------------------------------------------------------------------
// Hamiltonian assembly and validation
// ---------------------------------------------------------------------------

#[test]
fn new_rejects_zero_sites() {
    assert!(matches!(
        Hamiltonian::new(vec![], 0),
        Err(HamError::InvalidSiteCount(0))
    ));
}

#[test]
fn new_rejects_site_out_of_range() {
    let result = Hamiltonian::new(vec![WeightedTerm::z(2, 1.0)], 2);
    assert!(matches!(
        result,
        Err(HamError::SiteOutOfRange { site: 2, num_sites: 2 })
    ));
}

#[test]
fn new_rejects_duplicate_site() {
    let term = WeightedTerm::new(
        1.0,
        PauliString::from_ops([(1, PauliOp::X), (1, PauliOp::Z)]),
    );
    assert!(matches!(
        Hamiltonian::new(vec![term], 2),
        Err(HamError::DuplicateSite(1))
    ));
}

#[test]
fn new_accepts_identity_term() {
    // A constant energy offset is a legal term.
    let term = WeightedTerm::new(0.5, PauliString::from_ops(std::iter::empty()));
    let h = Hamiltonian::new(vec![term], 2).unwrap();
    assert_eq!(h.n_terms(), 1);
    assert_eq!(h.dim(), 4);
}

#[test]
fn lambda_sums_magnitudes() {
    let h = Hamiltonian::new(
        vec![
            WeightedTerm::z(0, -1.0),
            WeightedTerm::z(1, 0.5),
            WeightedTerm::zz(0, 1, -0.25),
        ],
        2,
    )
    .unwrap();
    assert!((h.lambda() - 1.75).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Simplify
// ---------------------------------------------------------------------------

#[test]
fn simplify_merges_identical_strings() {
    let h = Hamiltonian::new(
        vec![
            WeightedTerm::z(0, 1.0),
            WeightedTerm::x(1, 0.5),
            WeightedTerm::z(0, 0.25),
        ],
        2,
    )
    .unwrap();
    let s = h.simplify(0.0);
    assert_eq!(s.n_terms(), 2);
    assert!(approx_eq(s.terms()[0].coeff, Complex64::new(1.25, 0.0)));
    // First-occurrence order is preserved.
    assert_eq!(s.terms()[1].string.ops(), &[(1, PauliOp::X)]);
}

#[test]
fn simplify_drops_cancelled_terms() {
    let h = Hamiltonian::new(
        vec![WeightedTerm::z(0, 1.0), WeightedTerm::z(0, -1.0)],
        1,
    )
    .unwrap();
    assert_eq!(h.simplify(0.0).n_terms(), 0);
}

#[test]
fn simplify_respects_tolerance() {
    let h = Hamiltonian::new(
        vec![WeightedTerm::z(0, 1e-10), WeightedTerm::x(0, 1.0)],
        1,
    )
    .unwrap();
    assert_eq!(h.simplify(1e-9).n_terms(), 1);
    assert_eq!(h.simplify(0.0).n_terms(), 2);
}

#[test]
fn simplify_preserves_dense_action() {
    let h = Hamiltonian::new(
        vec![
            WeightedTerm::zz(0, 1, 0.3),
            WeightedTerm::x(0, -0.7),
            WeightedTerm::zz(0, 1, 0.4),
        ],
        2,
    )
    .unwrap();
    let dense = h.to_dense();
    let simplified = h.simplify(0.0).to_dense();
    for (a, b) in dense.iter().zip(simplified.iter()) {
        assert!(approx_eq(*a, *b));
    }
}

// ---------------------------------------------------------------------------
// Dense materialization
// ---------------------------------------------------------------------------

#[test]
fn dense_single_z_is_diagonal() {
    let h = Hamiltonian::new(vec![WeightedTerm::z(0, 1.0)], 1).unwrap();
    let m = h.to_dense();
    assert!(approx_eq(m[[0, 0]], Complex64::new(1.0, 0.0)));
    assert!(approx_eq(m[[1, 1]], Complex64::new(-1.0, 0.0)));
    assert!(approx_eq(m[[0, 1]], Complex64::new(0.0, 0.0)));
    assert!(approx_eq(m[[1, 0]], Complex64::new(0.0, 0.0)));
}

#[test]
fn dense_single_x_is_off_diagonal() {
    let h = Hamiltonian::new(vec![WeightedTerm::x(0, 2.0)], 1).unwrap();
    let m = h.to_dense();
    assert!(approx_eq(m[[0, 1]], Complex64::new(2.0, 0.0)));
    assert!(approx_eq(m[[1, 0]], Complex64::new(2.0, 0.0)));
    assert!(approx_eq(m[[0, 0]], Complex64::new(0.0, 0.0)));
}

#[test]
fn dense_single_y_matches_matrix() {
    let h = Hamiltonian::new(vec![WeightedTerm::y(0, 1.0)], 1).unwrap();
    let m = h.to_dense();
    // Y = [[0, -i], [i, 0]]
    assert!(approx_eq(m[[0, 1]], Complex64::new(0.0, -1.0)));
    assert!(approx_eq(m[[1, 0]], Complex64::new(0.0, 1.0)));
}

#[test]
fn dense_zz_diagonal_signs() {
    let h = Hamiltonian::new(vec![WeightedTerm::zz(0, 1, 1.0)], 2).unwrap();
    let m = h.to_dense();
    // Z⊗Z eigenvalues over |00⟩,|10⟩,|01⟩,|11⟩ (site 0 = least-significant bit).
    let expected = [1.0, -1.0, -1.0, 1.0];
    for (i, &e) in expected.iter().enumerate() {
        assert!(approx_eq(m[[i, i]], Complex64::new(e, 0.0)));
    }
}

#[test]
fn dense_identity_term_shifts_diagonal() {
    let offset = WeightedTerm::new(0.5, PauliString::from_ops(std::iter::empty()));
    let h = Hamiltonian::new(vec![offset], 1).unwrap();
    let m = h.to_dense();
    assert!(approx_eq(m[[0, 0]], Complex64::new(0.5, 0.0)));
    assert!(approx_eq(m[[1, 1]], Complex64::new(0.5, 0.0)));
}

#[test]
fn dense_real_coefficients_give_hermitian_matrix() {
    let h = Hamiltonian::new(
        vec![
            WeightedTerm::zz(0, 1, -0.2),
            WeightedTerm::x(0, -1.0),
            WeightedTerm::y(1, 0.4),
            WeightedTerm::from_labels("XY", &[0, 2], 0.1).unwrap(),
        ],
        3,
    )
    .unwrap();
    let m = h.to_dense();
    for i in 0..h.dim() {
        for j in 0..h.dim() {
            assert!(approx_eq(m[[i, j]], m[[j, i]].conj()));
        }
    }
}
