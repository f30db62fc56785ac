//! `qbridge-ops`: qubit operators as sparse sums of Pauli terms.
//!
//! A [`QubitOperator`] maps each [`PauliTerm`] (e.g. `X0 Z3`) to a complex
//! coefficient. Dense Pauli strings (`"XIIZ"`, qubit 0 first) are produced
//! and parsed by [`pauli_term_to_string`] and [`pauli_string_to_term`]; they
//! are the exchange format used by backend adapters.
//!
//! The [`trim`] module removes qubits a circuit leaves in a basis state,
//! folding their expectation values into the operator.
//!
//! # Quick start
//!
//! ```rust
//! use qbridge_ops::{QubitOperator, pauli_term_to_string};
//!
//! let h = QubitOperator::parse_term("X0 Z2", 0.5).unwrap()
//!     + QubitOperator::parse_term("Y1", -1.0).unwrap();
//! assert_eq!(h.count_qubits(), 3);
//!
//! let (term, _) = h.terms().next().unwrap();
//! assert_eq!(pauli_term_to_string(term, 3).unwrap(), "XIZ");
//! ```

pub mod error;
pub mod operator;
pub mod pauli;
pub mod trim;

pub use error::{OpsError, OpsResult};
pub use operator::{DEFAULT_COMPRESS_TOLERANCE, OperatorTerm, QubitOperator};
pub use pauli::{PauliOp, PauliTerm, pauli_string_to_term, pauli_term_to_string};
pub use trim::{
    BasisState, TrimmedQubit, trim_trivial_circuit, trim_trivial_operator, trim_trivial_qubits,
};
