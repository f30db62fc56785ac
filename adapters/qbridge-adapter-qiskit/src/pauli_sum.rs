//! Qiskit-native weighted Pauli sums.
//!
//! Qiskit labels are little-endian: the **rightmost** character acts on
//! qubit 0. `"XIZ"` is Z on qubit 0 and X on qubit 2.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TranslateError, TranslateResult};

/// A Pauli label in Qiskit order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pauli {
    label: String,
}

impl Pauli {
    /// Parse a label over `I`, `X`, `Y`, `Z`.
    pub fn from_label(label: impl Into<String>) -> TranslateResult<Self> {
        let label = label.into();
        if !label.chars().all(|c| matches!(c, 'I' | 'X' | 'Y' | 'Z')) {
            return Err(TranslateError::InvalidLabel(label));
        }
        Ok(Self { label })
    }

    /// The identity on `n` qubits.
    pub fn identity(n: usize) -> Self {
        Self {
            label: "I".repeat(n),
        }
    }

    /// The label, rightmost character on qubit 0.
    pub fn to_label(&self) -> &str {
        &self.label
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.label.len()
    }

    /// The Pauli character acting on `qubit`, or `None` if out of range.
    pub fn get(&self, qubit: usize) -> Option<char> {
        let n = self.label.len();
        if qubit < n {
            self.label.as_bytes().get(n - 1 - qubit).map(|&b| b as char)
        } else {
            None
        }
    }
}

impl FromStr for Pauli {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A weighted sum of Pauli labels of equal width, like Qiskit's
/// `PauliSumOp` / `SparsePauliOp`.
///
/// Terms keep their insertion order. The sum is never empty: the zero
/// operator is a single identity term with coefficient 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<(String, Complex64)>", try_from = "Vec<(String, Complex64)>")]
pub struct PauliSumOp {
    num_qubits: usize,
    terms: Vec<(Pauli, Complex64)>,
}

impl PauliSumOp {
    /// Build from `(label, coefficient)` pairs, like `PauliSumOp.from_list`.
    pub fn from_list<S, I>(list: I) -> TranslateResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Complex64)>,
    {
        let mut terms: Vec<(Pauli, Complex64)> = Vec::new();
        let mut width = None;

        for (label, coeff) in list {
            let pauli = Pauli::from_label(label)?;
            let expected = *width.get_or_insert(pauli.num_qubits());
            if pauli.num_qubits() != expected {
                return Err(TranslateError::WidthMismatch {
                    got: pauli.num_qubits(),
                    label: pauli.label,
                    expected,
                });
            }
            terms.push((pauli, coeff));
        }

        let num_qubits = width.ok_or(TranslateError::EmptySum)?;
        Ok(Self { num_qubits, terms })
    }

    /// The zero operator on `n` qubits.
    pub fn zero(n: usize) -> Self {
        Self {
            num_qubits: n,
            terms: vec![(Pauli::identity(n), Complex64::new(0.0, 0.0))],
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the sum has no terms. Never true for a validated sum.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(pauli, coefficient)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Pauli, Complex64)> {
        self.terms.iter().map(|(p, c)| (p, *c))
    }

    /// Export as `(label, coefficient)` pairs, like `to_list()`.
    pub fn to_list(&self) -> Vec<(String, Complex64)> {
        self.terms
            .iter()
            .map(|(p, c)| (p.label.clone(), *c))
            .collect()
    }

    /// Merge repeated labels and drop terms with `|c| <= tol`.
    ///
    /// First occurrences fix the order. A sum that cancels completely
    /// becomes [`PauliSumOp::zero`].
    #[must_use]
    pub fn simplify(&self, tol: f64) -> Self {
        let mut merged: Vec<(Pauli, Complex64)> = Vec::with_capacity(self.terms.len());
        for (pauli, coeff) in &self.terms {
            match merged.iter_mut().find(|(p, _)| p == pauli) {
                Some((_, c)) => *c += coeff,
                None => merged.push((pauli.clone(), *coeff)),
            }
        }
        merged.retain(|(_, c)| c.norm() > tol);

        if merged.is_empty() {
            Self::zero(self.num_qubits)
        } else {
            Self {
                num_qubits: self.num_qubits,
                terms: merged,
            }
        }
    }
}

impl From<PauliSumOp> for Vec<(String, Complex64)> {
    fn from(op: PauliSumOp) -> Self {
        op.terms.into_iter().map(|(p, c)| (p.label, c)).collect()
    }
}

impl TryFrom<Vec<(String, Complex64)>> for PauliSumOp {
    type Error = TranslateError;

    fn try_from(list: Vec<(String, Complex64)>) -> Result<Self, Self::Error> {
        Self::from_list(list)
    }
}

impl fmt::Display for PauliSumOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{c} * {p}")?;
        }
        Ok(())
    }
}
