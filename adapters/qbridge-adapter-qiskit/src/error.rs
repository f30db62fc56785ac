//! Error types for the Qiskit adapter.

use thiserror::Error;

/// Result type for Qiskit translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors that can occur when translating to or from the Qiskit data model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// The gate name has no Qiskit counterpart.
    #[error("Gate '{0}' not supported on backend qiskit")]
    UnsupportedGate(String),

    /// Qiskit's circuit methods take at most one control qubit.
    #[error(
        "Multi-controlled gates not supported with qiskit. Gate {gate} with controls {controls:?} is not allowed"
    )]
    MultiControlled {
        /// Name of the gate.
        gate: String,
        /// The offending control indices.
        controls: Vec<u32>,
    },

    /// A controlled gate has no control qubit.
    #[error("Gate '{0}' requires a control qubit")]
    MissingControl(String),

    /// An uncontrolled gate was given a control qubit.
    #[error("Gate '{0}' does not accept a control qubit")]
    UnexpectedControl(String),

    /// Not enough target qubits for the gate's shape.
    #[error("Gate '{gate}' requires {expected} target qubit(s), got {got}")]
    TargetCount {
        /// Name of the gate.
        gate: String,
        /// Number of targets the gate needs.
        expected: usize,
        /// Number of targets supplied.
        got: usize,
    },

    /// A parameterized gate lacks its parameter.
    #[error("Gate '{0}' requires a parameter")]
    MissingParameter(String),

    /// Instruction arity does not match the native gate.
    #[error("Instruction '{gate}' expects {expected} {what}, got {got}")]
    Arity {
        /// Native gate name.
        gate: &'static str,
        /// What was miscounted (qubits, clbits, params).
        what: &'static str,
        /// Expected count.
        expected: usize,
        /// Actual count.
        got: usize,
    },

    /// Qubit or classical bit index outside the circuit.
    #[error("Index {index} out of range for {register} register of size {size}")]
    IndexOutOfRange {
        /// `"qubit"` or `"clbit"`.
        register: &'static str,
        /// The offending index.
        index: u32,
        /// Register size.
        size: u32,
    },

    /// Same qubit used twice in one instruction.
    #[error("Duplicate qubit {0} in instruction")]
    DuplicateQubit(u32),

    /// Invalid Pauli label.
    #[error("Invalid Pauli label '{0}'")]
    InvalidLabel(String),

    /// Pauli labels of one sum differ in length.
    #[error("Pauli label '{label}' has {got} qubits, expected {expected}")]
    WidthMismatch {
        /// The offending label.
        label: String,
        /// Width of the first label.
        expected: usize,
        /// Width of this label.
        got: usize,
    },

    /// An empty list of Pauli terms.
    #[error("Cannot build a Pauli sum from an empty list")]
    EmptySum,

    /// Register too large for the native `u32` indexing.
    #[error("Circuit width {0} exceeds the supported register size")]
    TooManyQubits(usize),

    /// Operator conversion error.
    #[error("Operator error: {0}")]
    Ops(#[from] qbridge_ops::OpsError),
}
