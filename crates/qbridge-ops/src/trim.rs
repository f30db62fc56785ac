//! Trivial-qubit trimming.
//!
//! Qubits that a circuit leaves in a computational basis state (never
//! touched, or flipped by a lone `X`) do not need to be simulated: their
//! contribution to an expectation value is a known sign. Trimming removes
//! them from the circuit and folds their expectation values into the
//! operator coefficients.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use qbridge_ir::{Circuit, QubitId};

use crate::error::{OpsError, OpsResult};
use crate::operator::{DEFAULT_COMPRESS_TOLERANCE, QubitOperator};
use crate::pauli::{PauliOp, PauliTerm};

/// Computational basis state of a trimmed qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisState {
    /// |0⟩
    Zero,
    /// |1⟩
    One,
}

impl BasisState {
    /// ⟨s|Z|s⟩ for this state.
    fn z_expectation(self) -> f64 {
        match self {
            BasisState::Zero => 1.0,
            BasisState::One => -1.0,
        }
    }
}

/// A qubit removed from the circuit together with its fixed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimmedQubit {
    /// Index of the qubit in the untrimmed register.
    pub index: u32,
    /// State the qubit is left in.
    pub state: BasisState,
}

impl TrimmedQubit {
    /// Create a trimmed-qubit record.
    pub fn new(index: u32, state: BasisState) -> Self {
        Self { index, state }
    }
}

/// Replace trimmed qubits by their expectation values.
///
/// For every term, a trimmed qubit contributes a factor of 0 (X or Y), ±1
/// (Z, depending on the state) or 1 (identity). With `reindex` the remaining
/// qubits are renumbered to close the gaps; otherwise the trimmed positions
/// simply become identity.
pub fn trim_trivial_operator(
    op: &QubitOperator,
    n_qubits: usize,
    trimmed: &[TrimmedQubit],
    reindex: bool,
) -> OpsResult<QubitOperator> {
    let mut trimmed = trimmed.to_vec();
    trimmed.sort_by_key(|t| t.index);
    if let Some(t) = trimmed.iter().find(|t| t.index as usize >= n_qubits) {
        return Err(OpsError::QubitOutOfRange {
            qubit: t.index,
            n_qubits,
        });
    }
    let state_of = |q: u32| {
        trimmed
            .binary_search_by_key(&q, |t| t.index)
            .ok()
            .map(|i| trimmed[i].state)
    };
    // Number of trimmed qubits strictly below q.
    let shift = |q: u32| trimmed.partition_point(|t| t.index < q) as u32;

    let mut result = QubitOperator::new();
    'terms: for (term, coeff) in op.terms() {
        let mut factor = 1.0;
        let mut kept = Vec::with_capacity(term.ops().len());

        for &(q, pauli) in term.ops() {
            if q as usize >= n_qubits {
                return Err(OpsError::QubitOutOfRange { qubit: q, n_qubits });
            }
            match (state_of(q), pauli) {
                (Some(_), PauliOp::X | PauliOp::Y) => continue 'terms,
                (Some(state), PauliOp::Z) => factor *= state.z_expectation(),
                (None, _) => {
                    let index = if reindex { q - shift(q) } else { q };
                    kept.push((index, pauli));
                }
            }
        }

        result.add_term(PauliTerm::new(kept)?, coeff * factor);
    }
    // Terms that cancel after folding are removed, not kept at zero.
    result.compress(DEFAULT_COMPRESS_TOLERANCE);

    debug!(
        input_terms = op.len(),
        output_terms = result.len(),
        trimmed = trimmed.len(),
        reindex,
        "trimmed qubit operator"
    );
    Ok(result)
}

/// Split off the trivial part of a circuit.
///
/// The circuit is first simplified (inverse pairs cancelled, rotations below
/// `rotation_threshold` dropped). Qubits that then carry no gate are trimmed
/// in |0⟩, qubits whose only gate is a single `X` are trimmed in |1⟩. The
/// remaining gates are returned on a register renumbered to consecutive
/// indices, preserving the relative order of the kept qubits.
pub fn trim_trivial_circuit(
    circuit: &Circuit,
    rotation_threshold: f64,
) -> OpsResult<(Circuit, Vec<TrimmedQubit>)> {
    let width = circuit.width();
    let width_u32 = u32::try_from(width).map_err(|_| OpsError::TooManyQubits(width))?;
    let mut simplified = circuit.clone();
    let cancelled = simplified.remove_redundant_gates();
    let dropped = simplified.remove_small_rotations(rotation_threshold);

    let groups = simplified.entangled_indices();
    let parts = simplified.split();

    let gated: FxHashSet<QubitId> = groups.iter().flatten().copied().collect();

    let mut trimmed: Vec<TrimmedQubit> = (0..width_u32)
        .filter(|&q| !gated.contains(&QubitId(q)))
        .map(|q| TrimmedQubit::new(q, BasisState::Zero))
        .collect();

    let mut kept = Circuit::default();
    for (group, part) in groups.iter().zip(parts) {
        let lone_x = group.len() == 1 && part.size() == 1 && part.gates()[0].name == "X";
        match group.first() {
            Some(q) if lone_x => trimmed.push(TrimmedQubit::new(q.0, BasisState::One)),
            _ => kept += part,
        }
    }
    trimmed.sort_by_key(|t| t.index);

    let mapping: FxHashMap<QubitId, QubitId> = (0..width_u32)
        .filter(|q| trimmed.binary_search_by_key(q, |t| t.index).is_err())
        .enumerate()
        .map(|(new, old)| (QubitId(old), QubitId::from(new)))
        .collect();
    let kept = kept.reindex_qubits(&mapping)?;

    debug!(
        width,
        cancelled,
        dropped,
        trimmed = trimmed.len(),
        remaining_gates = kept.size(),
        "trimmed circuit"
    );
    Ok((kept, trimmed))
}

/// Trim a circuit and the operator measured on it in one go.
///
/// The operator must fit in the circuit's register.
pub fn trim_trivial_qubits(
    op: &QubitOperator,
    circuit: &Circuit,
    rotation_threshold: f64,
) -> OpsResult<(Circuit, QubitOperator)> {
    let (trimmed_circuit, trimmed) = trim_trivial_circuit(circuit, rotation_threshold)?;
    let trimmed_op = trim_trivial_operator(op, circuit.width(), &trimmed, true)?;
    Ok((trimmed_circuit, trimmed_op))
}
