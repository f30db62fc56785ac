//! Error types for the operator crate.

use thiserror::Error;

/// Errors produced while building, converting or trimming qubit operators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpsError {
    /// A term references a qubit outside the declared register.
    #[error("Pauli term references qubit {qubit} but only {n_qubits} qubits are available")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits available.
        n_qubits: usize,
    },

    /// A character outside `I`, `X`, `Y`, `Z` in a Pauli string.
    #[error("Invalid Pauli character '{0}'")]
    InvalidPauli(char),

    /// A term could not be parsed from its textual form.
    #[error("Invalid Pauli term '{0}'")]
    InvalidTerm(String),

    /// The same qubit appears twice in one term.
    #[error("Qubit {0} appears more than once in a Pauli term")]
    DuplicateQubit(u32),

    /// Register too large for `u32` qubit indices.
    #[error("Circuit width {0} exceeds the supported register size")]
    TooManyQubits(usize),

    /// Circuit manipulation failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qbridge_ir::IrError),
}

/// Result type for operator operations.
pub type OpsResult<T> = Result<T, OpsError>;
