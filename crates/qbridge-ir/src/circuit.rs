//! Abstract circuit: an ordered gate sequence.

use std::collections::BTreeSet;
use std::ops::{Add, AddAssign};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, PARAMETERIZED_GATES};
use crate::qubit::QubitId;

/// Default magnitude below which [`Circuit::remove_small_rotations`] drops a
/// rotation.
pub const DEFAULT_ROTATION_THRESHOLD: f64 = 1e-3;

/// A quantum circuit in the abstract, backend-agnostic format.
///
/// The circuit is a plain sequence of [`Gate`]s applied in order. Its width
/// is the larger of an optional explicit qubit count and the highest qubit
/// index referenced by any gate, plus one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    gates: Vec<Gate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n_qubits: Option<usize>,
}

impl Circuit {
    /// Create a circuit from a gate sequence, validating every gate.
    pub fn new(gates: impl IntoIterator<Item = Gate>) -> IrResult<Self> {
        let mut circuit = Self::default();
        for gate in gates {
            circuit.add_gate(gate)?;
        }
        Ok(circuit)
    }

    /// Create a circuit with an explicit minimum width.
    pub fn with_n_qubits(gates: impl IntoIterator<Item = Gate>, n_qubits: usize) -> IrResult<Self> {
        let mut circuit = Self::new(gates)?;
        circuit.n_qubits = Some(n_qubits);
        Ok(circuit)
    }

    /// Parse a circuit from JSON and validate it.
    pub fn from_json(json: &str) -> IrResult<Self> {
        let raw: Circuit = serde_json::from_str(json)?;
        let mut circuit = Self::new(raw.gates)?;
        circuit.n_qubits = raw.n_qubits;
        Ok(circuit)
    }

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append a gate.
    pub fn add_gate(&mut self, gate: Gate) -> IrResult<&mut Self> {
        gate.validate()?;
        self.gates.push(gate);
        Ok(self)
    }

    /// The gates, in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn size(&self) -> usize {
        self.gates.len()
    }

    /// Number of qubits the circuit spans.
    pub fn width(&self) -> usize {
        let used = self
            .gates
            .iter()
            .flat_map(Gate::qubits)
            .map(|q| q.index() + 1)
            .max()
            .unwrap_or(0);
        used.max(self.n_qubits.unwrap_or(0))
    }

    /// Explicitly requested width, if any.
    pub fn n_qubits(&self) -> Option<usize> {
        self.n_qubits
    }

    /// Number of occurrences of each gate name.
    pub fn counts(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for gate in &self.gates {
            *counts.entry(gate.name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Check if any gate carries a variational parameter.
    pub fn is_variational(&self) -> bool {
        self.gates.iter().any(|g| g.is_variational)
    }

    /// The inverse circuit: gates reversed and individually inverted.
    pub fn inverse(&self) -> IrResult<Self> {
        let gates = self
            .gates
            .iter()
            .rev()
            .map(Gate::inverse)
            .collect::<IrResult<Vec<_>>>()?;
        Ok(Self {
            gates,
            n_qubits: self.n_qubits,
        })
    }

    // =========================================================================
    // Structure analysis
    // =========================================================================

    /// Groups of qubits connected through multi-qubit gates.
    ///
    /// Only qubits that carry at least one gate appear. Groups are ordered by
    /// the position of the first gate that touches them.
    pub fn entangled_indices(&self) -> Vec<BTreeSet<QubitId>> {
        let mut groups: Vec<BTreeSet<QubitId>> = Vec::new();

        for gate in &self.gates {
            let qubits: BTreeSet<QubitId> = gate.qubits().collect();
            let hits: Vec<usize> = groups
                .iter()
                .enumerate()
                .filter(|(_, g)| !g.is_disjoint(&qubits))
                .map(|(i, _)| i)
                .collect();

            match hits.split_first() {
                None => groups.push(qubits),
                Some((&first, rest)) => {
                    // Merge later groups into the earliest one, back to front so
                    // indices stay valid.
                    for &i in rest.iter().rev() {
                        let absorbed = groups.remove(i);
                        groups[first].extend(absorbed);
                    }
                    groups[first].extend(qubits);
                }
            }
        }

        groups
    }

    /// Split into independent sub-circuits, one per entangled group.
    ///
    /// Sub-circuits keep the original qubit indices and gate order.
    pub fn split(&self) -> Vec<Circuit> {
        self.entangled_indices()
            .into_iter()
            .map(|group| Circuit {
                gates: self
                    .gates
                    .iter()
                    .filter(|g| g.qubits().all(|q| group.contains(&q)))
                    .cloned()
                    .collect(),
                n_qubits: None,
            })
            .collect()
    }

    // =========================================================================
    // Simplification
    // =========================================================================

    /// Remove rotation gates whose numeric angle is smaller than `threshold`
    /// in magnitude. Symbolic parameters are kept.
    ///
    /// Returns the number of gates removed.
    pub fn remove_small_rotations(&mut self, threshold: f64) -> usize {
        let before = self.gates.len();
        self.gates.retain(|g| {
            let small = PARAMETERIZED_GATES.contains(&g.name.as_str())
                && g.parameter
                    .as_ref()
                    .and_then(|p| p.as_f64())
                    .is_some_and(|v| v.abs() < threshold);
            !small
        });
        before - self.gates.len()
    }

    /// Cancel adjacent gate pairs that are inverses of each other and act on
    /// exactly the same qubits, with no other gate on those qubits in between.
    ///
    /// Cancellation cascades: `X X X X` on one qubit is removed entirely.
    /// Returns the number of gates removed.
    pub fn remove_redundant_gates(&mut self) -> usize {
        let mut removed = vec![false; self.gates.len()];
        // Per qubit, the indices of surviving gates that touch it, latest last.
        let mut stacks: FxHashMap<QubitId, Vec<usize>> = FxHashMap::default();

        for (i, gate) in self.gates.iter().enumerate() {
            let qubits: Vec<QubitId> = gate.qubits().collect();

            let top = qubits
                .iter()
                .map(|q| stacks.get(q).and_then(|s| s.last().copied()))
                .collect::<Option<Vec<usize>>>();

            let partner = top.and_then(|tops| {
                let j = *tops.first()?;
                let same_slot = tops.iter().all(|&t| t == j);
                let prev = &self.gates[j];
                let same_qubits = prev.num_qubits() == qubits.len();
                let cancels = prev.inverse().is_ok_and(|inv| inv == *gate);
                (same_slot && same_qubits && cancels).then_some(j)
            });

            match partner {
                Some(j) => {
                    removed[i] = true;
                    removed[j] = true;
                    for q in &qubits {
                        if let Some(stack) = stacks.get_mut(q) {
                            stack.pop();
                        }
                    }
                }
                None => {
                    for q in qubits {
                        stacks.entry(q).or_default().push(i);
                    }
                }
            }
        }

        let before = self.gates.len();
        let mut flags = removed.into_iter();
        self.gates.retain(|_| !flags.next().unwrap_or(false));
        before - self.gates.len()
    }

    /// Rename qubits according to `mapping`.
    ///
    /// Every qubit used by the circuit must have an entry. The explicit width
    /// is dropped; the new width follows from the mapped indices.
    pub fn reindex_qubits(&self, mapping: &FxHashMap<QubitId, QubitId>) -> IrResult<Self> {
        let map = |q: &QubitId| {
            mapping
                .get(q)
                .copied()
                .ok_or(IrError::UnmappedQubit { qubit: *q })
        };

        let mut gates = Vec::with_capacity(self.gates.len());
        for gate in &self.gates {
            let mut g = gate.clone();
            g.target = gate.target.iter().map(map).collect::<IrResult<_>>()?;
            g.control = gate
                .control
                .as_ref()
                .map(|c| c.iter().map(map).collect::<IrResult<Vec<_>>>())
                .transpose()?;
            gates.push(g);
        }

        Ok(Self {
            gates,
            n_qubits: None,
        })
    }
}

impl AddAssign for Circuit {
    fn add_assign(&mut self, other: Self) {
        self.gates.extend(other.gates);
        self.n_qubits = match (self.n_qubits, other.n_qubits) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }
}

impl Add for Circuit {
    type Output = Circuit;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}
