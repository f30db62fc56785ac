//! Property-based tests for operator trimming.

use num_complex::Complex64;
use proptest::prelude::*;
use qbridge_ops::{
    BasisState, PauliOp, PauliTerm, QubitOperator, TrimmedQubit, trim_trivial_operator,
};

const N_QUBITS: u32 = 6;

fn arb_term() -> impl Strategy<Value = PauliTerm> {
    prop::collection::btree_map(
        0..N_QUBITS,
        prop_oneof![Just(PauliOp::X), Just(PauliOp::Y), Just(PauliOp::Z)],
        0..=4,
    )
    .prop_map(|ops| PauliTerm::new(ops).expect("btree keys are unique"))
}

fn arb_operator() -> impl Strategy<Value = QubitOperator> {
    prop::collection::vec((arb_term(), -2.0_f64..2.0), 0..8).prop_map(|terms| {
        terms
            .into_iter()
            .map(|(t, c)| (t, Complex64::new(c, 0.0)))
            .collect()
    })
}

proptest! {
    /// Trimming qubits the operator never touches only renumbers it.
    #[test]
    fn trimming_untouched_qubits_keeps_coefficients(op in arb_operator()) {
        let used: Vec<u32> = (0..N_QUBITS)
            .filter(|&q| op.terms().any(|(t, _)| t.get(q).is_some()))
            .collect();
        let idle: Vec<TrimmedQubit> = (0..N_QUBITS)
            .filter(|q| !used.contains(q))
            .map(|q| TrimmedQubit::new(q, BasisState::Zero))
            .collect();

        let out = trim_trivial_operator(&op, N_QUBITS as usize, &idle, false).unwrap();
        prop_assert!(out.approx_eq(&op, 1e-12));

        let reindexed = trim_trivial_operator(&op, N_QUBITS as usize, &idle, true).unwrap();
        prop_assert_eq!(reindexed.len(), op.len());
        prop_assert!(reindexed.count_qubits() <= used.len());
    }

    /// Flipping a trimmed qubit from |0⟩ to |1⟩ flips the sign of every
    /// surviving term with a Z on it.
    #[test]
    fn one_state_flips_z_sign(op in arb_operator(), q in 0..N_QUBITS) {
        let zero = trim_trivial_operator(
            &op, N_QUBITS as usize, &[TrimmedQubit::new(q, BasisState::Zero)], false,
        ).unwrap();
        let one = trim_trivial_operator(
            &op, N_QUBITS as usize, &[TrimmedQubit::new(q, BasisState::One)], false,
        ).unwrap();

        let z_part: QubitOperator = op
            .terms()
            .filter(|(t, _)| t.get(q) == Some(PauliOp::Z))
            .map(|(t, c)| {
                let rest = PauliTerm::new(t.ops().iter().copied().filter(|(i, _)| *i != q))
                    .expect("subset of a valid term");
                (rest, c)
            })
            .collect();

        // zero - one == 2 * (Z part with the Z removed)
        let diff = zero + one * -1.0;
        prop_assert!(diff.approx_eq(&(z_part * 2.0), 1e-9));
    }
}
