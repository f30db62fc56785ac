//! Qubit operator to and from Qiskit Pauli sums.
//!
//! Dense Pauli strings from [`qbridge_ops`] put qubit 0 first. Qiskit puts
//! it last, so both directions reverse the string.

use num_complex::Complex64;
use qbridge_ops::{
    DEFAULT_COMPRESS_TOLERANCE, QubitOperator, pauli_string_to_term, pauli_term_to_string,
};
use tracing::debug;

use crate::error::TranslateResult;
use crate::pauli_sum::PauliSumOp;

/// Convert a [`QubitOperator`] into a Qiskit [`PauliSumOp`] on `n_qubits`.
///
/// Every term becomes a dense label of length `n_qubits` in Qiskit order.
/// An empty operator becomes [`PauliSumOp::zero`].
pub fn translate_op_to_qiskit(op: &QubitOperator, n_qubits: usize) -> TranslateResult<PauliSumOp> {
    if op.is_empty() {
        debug!(n_qubits, "empty operator, emitting zero");
        return Ok(PauliSumOp::zero(n_qubits));
    }

    let list = op
        .terms()
        .map(|(term, coeff)| -> TranslateResult<(String, Complex64)> {
            let dense = pauli_term_to_string(term, n_qubits)?;
            Ok((dense.chars().rev().collect::<String>(), coeff))
        })
        .collect::<TranslateResult<Vec<_>>>()?;

    let sum = PauliSumOp::from_list(list)?;
    debug!(n_qubits, terms = sum.len(), "translated operator to qiskit");
    Ok(sum)
}

/// Convert a Qiskit [`PauliSumOp`] into a [`QubitOperator`].
///
/// Coefficients of repeated labels add up. The result is compressed with
/// [`DEFAULT_COMPRESS_TOLERANCE`].
pub fn translate_op_from_qiskit(sum: &PauliSumOp) -> TranslateResult<QubitOperator> {
    translate_op_from_qiskit_with_tolerance(sum, DEFAULT_COMPRESS_TOLERANCE)
}

/// [`translate_op_from_qiskit`] with an explicit compression tolerance.
pub fn translate_op_from_qiskit_with_tolerance(
    sum: &PauliSumOp,
    tol: f64,
) -> TranslateResult<QubitOperator> {
    let mut op = QubitOperator::new();
    for (pauli, coeff) in sum.iter() {
        let reversed: String = pauli.to_label().chars().rev().collect();
        op.add_term(pauli_string_to_term(&reversed)?, coeff);
    }
    op.compress(tol);

    debug!(
        terms_in = sum.len(),
        terms_out = op.len(),
        "translated operator from qiskit"
    );
    Ok(op)
}
