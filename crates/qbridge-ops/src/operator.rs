//! Sparse qubit operator: a linear combination of Pauli terms.
//!
//! ```text
//!   O = Σ_k  c_k · P_k        c_k ∈ ℂ
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::OpsResult;
use crate::pauli::PauliTerm;

/// Default tolerance for [`QubitOperator::compress`].
pub const DEFAULT_COMPRESS_TOLERANCE: f64 = 1e-8;

/// A weighted sum of Pauli terms, keyed by term.
///
/// Terms are kept in a sorted map so iteration order is deterministic.
/// Adding a term that already exists accumulates its coefficient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<OperatorTerm>", from = "Vec<OperatorTerm>")]
pub struct QubitOperator {
    terms: BTreeMap<PauliTerm, Complex64>,
}

/// Serialized form of one operator term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorTerm {
    /// Sparse term, e.g. `"X0 Z2"`; empty for the identity.
    pub term: PauliTerm,
    /// Complex coefficient, serialized as `[re, im]`.
    pub coefficient: Complex64,
}

impl QubitOperator {
    /// The zero operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// A multiple of the identity.
    pub fn identity(coeff: impl Into<Complex64>) -> Self {
        Self::from_term(PauliTerm::identity(), coeff)
    }

    /// A single weighted term.
    pub fn from_term(term: PauliTerm, coeff: impl Into<Complex64>) -> Self {
        let mut op = Self::new();
        op.add_term(term, coeff);
        op
    }

    /// Parse a single term from its sparse text form, e.g. `"X0 Y1"`.
    pub fn parse_term(term: &str, coeff: impl Into<Complex64>) -> OpsResult<Self> {
        Ok(Self::from_term(term.parse()?, coeff))
    }

    /// Add `coeff · term`, accumulating onto an existing coefficient.
    pub fn add_term(&mut self, term: PauliTerm, coeff: impl Into<Complex64>) {
        *self.terms.entry(term).or_default() += coeff.into();
    }

    /// Iterate over `(term, coefficient)` pairs in term order.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliTerm, Complex64)> {
        self.terms.iter().map(|(t, c)| (t, *c))
    }

    /// Coefficient of `term`, if present.
    pub fn coefficient(&self, term: &PauliTerm) -> Option<Complex64> {
        self.terms.get(term).copied()
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no term is stored.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Minimum register size able to hold every term.
    ///
    /// Returns 0 for an empty or identity-only operator.
    pub fn count_qubits(&self) -> usize {
        self.terms
            .keys()
            .filter_map(PauliTerm::max_qubit)
            .max()
            .map_or(0, |q| q as usize + 1)
    }

    /// Drop terms with `|c| <= tol` and make coefficients with `|Im c| <= tol`
    /// purely real.
    pub fn compress(&mut self, tol: f64) {
        self.terms.retain(|_, c| c.norm() > tol);
        for c in self.terms.values_mut() {
            if c.im.abs() <= tol {
                c.im = 0.0;
            }
        }
    }

    /// True if every coefficient is within `tol` of the other operator's.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        let keys = self.terms.keys().chain(other.terms.keys());
        keys.into_iter().all(|k| {
            let a = self.terms.get(k).copied().unwrap_or_default();
            let b = other.terms.get(k).copied().unwrap_or_default();
            (a - b).norm() <= tol
        })
    }
}

impl FromIterator<(PauliTerm, Complex64)> for QubitOperator {
    fn from_iter<T: IntoIterator<Item = (PauliTerm, Complex64)>>(iter: T) -> Self {
        let mut op = Self::new();
        for (term, coeff) in iter {
            op.add_term(term, coeff);
        }
        op
    }
}

impl From<QubitOperator> for Vec<OperatorTerm> {
    fn from(op: QubitOperator) -> Self {
        op.terms
            .into_iter()
            .map(|(term, coefficient)| OperatorTerm { term, coefficient })
            .collect()
    }
}

impl From<Vec<OperatorTerm>> for QubitOperator {
    fn from(terms: Vec<OperatorTerm>) -> Self {
        terms.into_iter().map(|t| (t.term, t.coefficient)).collect()
    }
}

impl AddAssign for QubitOperator {
    fn add_assign(&mut self, other: Self) {
        for (term, coeff) in other.terms {
            self.add_term(term, coeff);
        }
    }
}

impl Add for QubitOperator {
    type Output = QubitOperator;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl Mul<Complex64> for QubitOperator {
    type Output = QubitOperator;

    fn mul(mut self, scalar: Complex64) -> Self::Output {
        for c in self.terms.values_mut() {
            *c *= scalar;
        }
        self
    }
}

impl Mul<f64> for QubitOperator {
    type Output = QubitOperator;

    fn mul(self, scalar: f64) -> Self::Output {
        self * Complex64::new(scalar, 0.0)
    }
}

impl fmt::Display for QubitOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (term, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                writeln!(f, " +")?;
            }
            write!(f, "{c} [{term}]")?;
        }
        Ok(())
    }
}
