//! qbridge Abstract Circuit Representation
//!
//! This crate holds the backend-agnostic circuit format that every qbridge
//! adapter translates from. A circuit is an ordered list of named gates with
//! explicit targets, optional controls and an optional angle parameter.
//!
//! # Core Components
//!
//! - **Indices**: [`QubitId`], [`ClbitId`]
//! - **Parameters**: [`Parameter`], a concrete angle or a variational symbol
//! - **Gates**: [`Gate`], identified by an upper-case name such as `"CNOT"`
//! - **Circuit**: [`Circuit`], with structure analysis (entangled groups,
//!   splitting) and light simplification (small rotations, inverse pairs)
//!
//! # Example
//!
//! ```rust
//! use qbridge_ir::{Circuit, Gate, QubitId};
//!
//! let circuit = Circuit::new([
//!     Gate::single("H", QubitId(0)),
//!     Gate::single("CNOT", QubitId(1)).with_control([QubitId(0)]),
//!     Gate::single("RZ", QubitId(1)).with_parameter(0.5),
//! ])
//! .unwrap();
//!
//! assert_eq!(circuit.width(), 2);
//! assert_eq!(circuit.size(), 3);
//! ```
//!
//! # Gate Vocabulary
//!
//! | Gates | Qubits | Parameter |
//! |-------|--------|-----------|
//! | `H`, `X`, `Y`, `Z`, `S`, `T` | 1 | no |
//! | `RX`, `RY`, `RZ`, `PHASE` | 1 | yes |
//! | `CNOT`, `CX`, `CY`, `CZ`, `CH` | 2 | no |
//! | `CRX`, `CRY`, `CRZ`, `CPHASE` | 2 | yes |
//! | `SWAP` | 2 | no |
//! | `XX` | 2 | yes |
//! | `CSWAP` | 3 | no |
//! | `MEASURE` | 1 | no |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod parameter;
pub mod qubit;

pub use circuit::{Circuit, DEFAULT_ROTATION_THRESHOLD};
pub use error::{IrError, IrResult};
pub use gate::{Gate, PARAMETERIZED_GATES};
pub use parameter::Parameter;
pub use qubit::{ClbitId, QubitId};
