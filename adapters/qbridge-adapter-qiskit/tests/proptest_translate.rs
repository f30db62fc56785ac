//! Property-based tests for the Qiskit translators.
//!
//! Operator labels must come out reversed and survive the round trip;
//! circuits must keep their gate count and qubit indices.

use num_complex::Complex64;
use proptest::prelude::*;
use qbridge_adapter_qiskit::{
    Pauli, translate_op_from_qiskit, translate_op_to_qiskit, translate_qiskit,
};
use qbridge_ir::{Circuit, Gate, QubitId};
use qbridge_ops::{PauliOp, PauliTerm, QubitOperator, pauli_term_to_string};

const N_QUBITS: u32 = 5;

fn arb_term() -> impl Strategy<Value = PauliTerm> {
    prop::collection::btree_map(
        0..N_QUBITS,
        prop_oneof![Just(PauliOp::X), Just(PauliOp::Y), Just(PauliOp::Z)],
        0..=N_QUBITS as usize,
    )
    .prop_map(|ops| PauliTerm::new(ops).expect("btree keys are unique"))
}

fn arb_operator() -> impl Strategy<Value = QubitOperator> {
    prop::collection::vec((arb_term(), -3.0_f64..3.0, -1.0_f64..1.0), 1..10).prop_map(|terms| {
        terms
            .into_iter()
            .map(|(t, re, im)| (t, Complex64::new(re, im)))
            .collect()
    })
}

/// Single- and two-qubit gates over a small register.
fn arb_gate() -> impl Strategy<Value = Gate> {
    let q = 0..N_QUBITS;
    prop_oneof![
        (prop_oneof![Just("H"), Just("X"), Just("S"), Just("T")], q.clone())
            .prop_map(|(name, t)| Gate::single(name, QubitId(t))),
        (prop_oneof![Just("RX"), Just("RZ"), Just("PHASE")], q.clone(), -3.0_f64..3.0)
            .prop_map(|(name, t, theta)| Gate::single(name, QubitId(t)).with_parameter(theta)),
        (prop_oneof![Just("CNOT"), Just("CZ"), Just("CH")], q.clone(), q.clone())
            .prop_filter("distinct qubits", |(_, c, t)| c != t)
            .prop_map(|(name, c, t)| Gate::single(name, QubitId(t)).with_control([QubitId(c)])),
        (q.clone(), q)
            .prop_filter("distinct qubits", |(a, b)| a != b)
            .prop_map(|(a, b)| Gate::new("SWAP", [QubitId(a), QubitId(b)])),
    ]
}

proptest! {
    /// Each Qiskit label is the reversed dense string of its term.
    #[test]
    fn labels_are_reversed(op in arb_operator()) {
        let sum = translate_op_to_qiskit(&op, N_QUBITS as usize).unwrap();
        for ((term, _), (pauli, _)) in op.terms().zip(sum.iter()) {
            let dense = pauli_term_to_string(term, N_QUBITS as usize).unwrap();
            let reversed: String = dense.chars().rev().collect();
            prop_assert_eq!(pauli.to_label(), reversed.as_str());
            for (q, op) in term.ops() {
                prop_assert_eq!(pauli.get(*q as usize), Some(op.as_char()));
            }
        }
    }

    /// to-native then from-native returns the compressed operator.
    #[test]
    fn operator_round_trip(op in arb_operator()) {
        let sum = translate_op_to_qiskit(&op, N_QUBITS as usize).unwrap();
        let back = translate_op_from_qiskit(&sum).unwrap();
        prop_assert!(back.approx_eq(&op, 1e-7));
    }

    /// Label parsing accepts exactly the IXYZ alphabet.
    #[test]
    fn label_alphabet(label in "[IXYZAB]{0,6}") {
        let valid = label.chars().all(|c| "IXYZ".contains(c));
        prop_assert_eq!(Pauli::from_label(label).is_ok(), valid);
    }

    /// Translation keeps the gate count and every qubit index.
    #[test]
    fn circuit_translation_preserves_qubits(
        gates in prop::collection::vec(arb_gate(), 1..20)
    ) {
        let circuit = Circuit::new(gates).unwrap();
        let qc = translate_qiskit(&circuit).unwrap();
        prop_assert_eq!(qc.size(), circuit.size());
        prop_assert_eq!(qc.num_qubits() as usize, circuit.width());

        for (gate, inst) in circuit.gates().iter().zip(qc.data()) {
            let expected: Vec<u32> = gate.qubits().map(|q| q.0).collect();
            prop_assert_eq!(&inst.qubits, &expected);
        }
    }
}
