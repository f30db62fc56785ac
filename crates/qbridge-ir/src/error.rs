//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate was built without any target qubit.
    #[error("Gate '{gate_name}' has no target qubit")]
    NoTarget {
        /// Name of the gate.
        gate_name: String,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A parameterized gate was built without its parameter.
    #[error("Gate '{0}' requires a parameter")]
    MissingParameter(String),

    /// The gate has no inverse in the abstract vocabulary.
    #[error("Gate '{0}' cannot be inverted")]
    NotInvertible(String),

    /// A reindexing map does not cover a qubit used by the circuit.
    #[error("Qubit {qubit} has no entry in the reindexing map")]
    UnmappedQubit {
        /// The qubit that was not mapped.
        qubit: QubitId,
    },

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
