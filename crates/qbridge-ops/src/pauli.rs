//! Pauli operators, sparse Pauli terms and dense Pauli strings.
//!
//! A [`PauliTerm`] lists only its non-identity factors, sorted by qubit:
//! `X0 Z3` is X on qubit 0 and Z on qubit 3, identity elsewhere. A dense
//! Pauli string spells out one character per qubit with **qubit 0 first**:
//! the same term over 4 qubits is `"XIIZ"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{OpsError, OpsResult};

/// Single-qubit Pauli operator. Identity is implicit and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Character used in Pauli strings.
    pub fn as_char(self) -> char {
        match self {
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }

    /// Parse a Pauli string character. `I` maps to `None`.
    pub fn from_char(c: char) -> OpsResult<Option<Self>> {
        match c {
            'I' => Ok(None),
            'X' => Ok(Some(PauliOp::X)),
            'Y' => Ok(Some(PauliOp::Y)),
            'Z' => Ok(Some(PauliOp::Z)),
            other => Err(OpsError::InvalidPauli(other)),
        }
    }
}

/// A tensor product of Pauli operators, identity on unlisted qubits.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PauliTerm {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliTerm {
    /// The identity term.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a term from `(qubit, op)` pairs in any order.
    pub fn new(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> OpsResult<Self> {
        let mut ops: Vec<(u32, PauliOp)> = ops.into_iter().collect();
        ops.sort_by_key(|(q, _)| *q);
        if let Some(w) = ops.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(OpsError::DuplicateQubit(w[0].0));
        }
        Ok(Self { ops })
    }

    /// Non-identity factors, sorted by qubit.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// The Pauli acting on `qubit`, `None` for identity.
    pub fn get(&self, qubit: u32) -> Option<PauliOp> {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .ok()
            .map(|i| self.ops[i].1)
    }

    /// True for the identity term.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (q, op)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{q}", op.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for PauliTerm {
    type Err = OpsError;

    /// Parse the sparse textual form, e.g. `"X0 Y1 Z5"`. The empty string is
    /// the identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ops = s
            .split_whitespace()
            .map(|factor| {
                let mut chars = factor.chars();
                let op = chars
                    .next()
                    .and_then(|c| PauliOp::from_char(c).ok().flatten())
                    .ok_or_else(|| OpsError::InvalidTerm(s.to_string()))?;
                let qubit = chars
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| OpsError::InvalidTerm(s.to_string()))?;
                Ok((qubit, op))
            })
            .collect::<OpsResult<Vec<_>>>()?;
        Self::new(ops)
    }
}

impl From<PauliTerm> for String {
    fn from(term: PauliTerm) -> Self {
        term.to_string()
    }
}

impl TryFrom<String> for PauliTerm {
    type Error = OpsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Render a term as a dense Pauli string of length `n_qubits`, qubit 0 first.
pub fn pauli_term_to_string(term: &PauliTerm, n_qubits: usize) -> OpsResult<String> {
    let mut chars = vec!['I'; n_qubits];
    for &(q, op) in term.ops() {
        let slot = chars.get_mut(q as usize).ok_or(OpsError::QubitOutOfRange {
            qubit: q,
            n_qubits,
        })?;
        *slot = op.as_char();
    }
    Ok(chars.into_iter().collect())
}

/// Parse a dense Pauli string (qubit 0 first) into a sparse term.
pub fn pauli_string_to_term(s: &str) -> OpsResult<PauliTerm> {
    let mut ops = Vec::new();
    for (q, c) in s.chars().enumerate() {
        if let Some(op) = PauliOp::from_char(c)? {
            let q = u32::try_from(q).map_err(|_| OpsError::InvalidTerm(s.to_string()))?;
            ops.push((q, op));
        }
    }
    // Indices come out sorted and unique, so no further checks are needed.
    Ok(PauliTerm { ops })
}
