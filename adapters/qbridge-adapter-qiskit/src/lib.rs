//! qbridge Adapter for Qiskit
//!
//! This crate translates qbridge circuits and qubit operators into the
//! Qiskit data model and back. It carries its own model of the pieces of
//! Qiskit it targets: [`QuantumCircuit`] with the standard-library gates
//! and [`PauliSumOp`] for weighted Pauli sums.
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter_qiskit::{translate_op_to_qiskit, translate_qiskit};
//! use qbridge_ir::{Circuit, Gate, QubitId};
//! use qbridge_ops::QubitOperator;
//!
//! let circuit = Circuit::new([
//!     Gate::single("H", QubitId(0)),
//!     Gate::single("CNOT", QubitId(1)).with_control([QubitId(0)]),
//! ])
//! .unwrap();
//! let qc = translate_qiskit(&circuit).unwrap();
//! assert!(qc.qasm().contains("cx q[0],q[1];"));
//!
//! let op = QubitOperator::parse_term("X0 Z2", 0.5).unwrap();
//! let sum = translate_op_to_qiskit(&op, 3).unwrap();
//! assert_eq!(sum.to_list()[0].0, "ZIX");
//! ```
//!
//! # Conventions
//!
//! Circuit qubit indices are kept as they are. Pauli labels are not:
//! Qiskit puts qubit 0 in the rightmost character, so every operator
//! conversion reverses the dense string.
//!
//! # Gate Set
//!
//! | qbridge | Qiskit | Arguments |
//! |---------|--------|-----------|
//! | `H`, `X`, `Y`, `Z`, `S`, `T` | same, lower-case | `(t0)` |
//! | `RX`, `RY`, `RZ`, `PHASE` | `rx`, `ry`, `rz`, `p` | `(θ, t0)` |
//! | `CRX`, `CRY`, `CRZ`, `CPHASE` | `crx`, `cry`, `crz`, `cp` | `(θ, c0, t0)` |
//! | `CNOT`, `CX`, `CY`, `CZ`, `CH` | `cx`, `cx`, `cy`, `cz`, `ch` | `(c0, t0)` |
//! | `SWAP` | `swap` | `(t0, t1)` |
//! | `CSWAP` | `cswap` | `(c0, t0, t1)` |
//! | `XX` | `rxx` | `(θ, t0, t1)` |
//! | `MEASURE` | `measure` | `(t0, c[t0])` |
//!
//! Gates with more than one control are rejected.

pub mod error;
pub mod gates;
pub mod native;
pub mod operator;
pub mod pauli_sum;
mod qasm;
pub mod translate;

pub use error::{TranslateError, TranslateResult};
pub use gates::{native_gate, qiskit_gates, supported_gates};
pub use native::{CircuitInstruction, NativeGate, NativeParam, QuantumCircuit};
pub use operator::{
    translate_op_from_qiskit, translate_op_from_qiskit_with_tolerance, translate_op_to_qiskit,
};
pub use pauli_sum::{Pauli, PauliSumOp};
pub use translate::translate_qiskit;
