//! Qiskit-native circuit model.
//!
//! Mirrors the parts of `qiskit.QuantumCircuit` the translator targets: a
//! fixed-size quantum and classical register and an ordered list of
//! instructions, each naming a standard-library gate. Builder methods take
//! their arguments in Qiskit's order: angle first, then control, then
//! target(s).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TranslateError, TranslateResult};

/// Standard-library gates of `qiskit.QuantumCircuit` used by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeGate {
    H,
    X,
    Y,
    Z,
    S,
    T,
    Rx,
    Ry,
    Rz,
    P,
    Ch,
    Cx,
    Cy,
    Cz,
    Crx,
    Cry,
    Crz,
    Cp,
    Swap,
    Rxx,
    Cswap,
    Measure,
}

impl NativeGate {
    /// Every native gate, in declaration order.
    pub const ALL: [NativeGate; 22] = [
        NativeGate::H,
        NativeGate::X,
        NativeGate::Y,
        NativeGate::Z,
        NativeGate::S,
        NativeGate::T,
        NativeGate::Rx,
        NativeGate::Ry,
        NativeGate::Rz,
        NativeGate::P,
        NativeGate::Ch,
        NativeGate::Cx,
        NativeGate::Cy,
        NativeGate::Cz,
        NativeGate::Crx,
        NativeGate::Cry,
        NativeGate::Crz,
        NativeGate::Cp,
        NativeGate::Swap,
        NativeGate::Rxx,
        NativeGate::Cswap,
        NativeGate::Measure,
    ];

    /// Qiskit method / OpenQASM 2 name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            NativeGate::H => "h",
            NativeGate::X => "x",
            NativeGate::Y => "y",
            NativeGate::Z => "z",
            NativeGate::S => "s",
            NativeGate::T => "t",
            NativeGate::Rx => "rx",
            NativeGate::Ry => "ry",
            NativeGate::Rz => "rz",
            NativeGate::P => "p",
            NativeGate::Ch => "ch",
            NativeGate::Cx => "cx",
            NativeGate::Cy => "cy",
            NativeGate::Cz => "cz",
            NativeGate::Crx => "crx",
            NativeGate::Cry => "cry",
            NativeGate::Crz => "crz",
            NativeGate::Cp => "cp",
            NativeGate::Swap => "swap",
            NativeGate::Rxx => "rxx",
            NativeGate::Cswap => "cswap",
            NativeGate::Measure => "measure",
        }
    }

    /// Number of qubit operands.
    #[inline]
    pub fn num_qubits(self) -> usize {
        match self {
            NativeGate::H
            | NativeGate::X
            | NativeGate::Y
            | NativeGate::Z
            | NativeGate::S
            | NativeGate::T
            | NativeGate::Rx
            | NativeGate::Ry
            | NativeGate::Rz
            | NativeGate::P
            | NativeGate::Measure => 1,

            NativeGate::Ch
            | NativeGate::Cx
            | NativeGate::Cy
            | NativeGate::Cz
            | NativeGate::Crx
            | NativeGate::Cry
            | NativeGate::Crz
            | NativeGate::Cp
            | NativeGate::Swap
            | NativeGate::Rxx => 2,

            NativeGate::Cswap => 3,
        }
    }

    /// Number of angle parameters.
    #[inline]
    pub fn num_params(self) -> usize {
        match self {
            NativeGate::Rx
            | NativeGate::Ry
            | NativeGate::Rz
            | NativeGate::P
            | NativeGate::Crx
            | NativeGate::Cry
            | NativeGate::Crz
            | NativeGate::Cp
            | NativeGate::Rxx => 1,
            _ => 0,
        }
    }

    /// Number of classical bit operands.
    #[inline]
    pub fn num_clbits(self) -> usize {
        match self {
            NativeGate::Measure => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for NativeGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A native gate parameter: a bound float or an unbound `Parameter` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeParam {
    /// Bound angle in radians.
    Float(f64),
    /// Unbound symbolic parameter.
    Symbol(String),
}

impl From<f64> for NativeParam {
    fn from(v: f64) -> Self {
        NativeParam::Float(v)
    }
}

impl From<&str> for NativeParam {
    fn from(name: &str) -> Self {
        NativeParam::Symbol(name.to_string())
    }
}

impl From<&qbridge_ir::Parameter> for NativeParam {
    fn from(p: &qbridge_ir::Parameter) -> Self {
        match p {
            qbridge_ir::Parameter::Value(v) => NativeParam::Float(*v),
            qbridge_ir::Parameter::Symbol(s) => NativeParam::Symbol(s.clone()),
        }
    }
}

/// One entry of `QuantumCircuit.data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitInstruction {
    /// The operation.
    pub gate: NativeGate,
    /// Angle parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<NativeParam>,
    /// Qubit operands, in Qiskit argument order.
    pub qubits: Vec<u32>,
    /// Classical bit operands.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clbits: Vec<u32>,
}

/// A Qiskit-model quantum circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumCircuit {
    num_qubits: u32,
    num_clbits: u32,
    data: Vec<CircuitInstruction>,
}

impl QuantumCircuit {
    /// Create an empty circuit, like `QuantumCircuit(num_qubits, num_clbits)`.
    pub fn new(num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            num_qubits,
            num_clbits,
            data: Vec::new(),
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// The instruction list.
    pub fn data(&self) -> &[CircuitInstruction] {
        &self.data
    }

    /// Number of instructions.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Count instructions by gate name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.data {
            *counts.entry(inst.gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Append an instruction after checking operand counts and bounds.
    pub fn append(
        &mut self,
        gate: NativeGate,
        params: Vec<NativeParam>,
        qubits: Vec<u32>,
        clbits: Vec<u32>,
    ) -> TranslateResult<&mut Self> {
        check_arity(gate, "qubits", gate.num_qubits(), qubits.len())?;
        check_arity(gate, "params", gate.num_params(), params.len())?;
        check_arity(gate, "clbits", gate.num_clbits(), clbits.len())?;

        for (i, &q) in qubits.iter().enumerate() {
            check_index("qubit", q, self.num_qubits)?;
            if qubits[..i].contains(&q) {
                return Err(TranslateError::DuplicateQubit(q));
            }
        }
        for &c in &clbits {
            check_index("clbit", c, self.num_clbits)?;
        }

        self.data.push(CircuitInstruction {
            gate,
            params,
            qubits,
            clbits,
        });
        Ok(self)
    }

    fn gate1(&mut self, gate: NativeGate, qubit: u32) -> TranslateResult<&mut Self> {
        self.append(gate, vec![], vec![qubit], vec![])
    }

    fn rot1(
        &mut self,
        gate: NativeGate,
        theta: impl Into<NativeParam>,
        qubit: u32,
    ) -> TranslateResult<&mut Self> {
        self.append(gate, vec![theta.into()], vec![qubit], vec![])
    }

    fn gate2(&mut self, gate: NativeGate, q0: u32, q1: u32) -> TranslateResult<&mut Self> {
        self.append(gate, vec![], vec![q0, q1], vec![])
    }

    fn rot2(
        &mut self,
        gate: NativeGate,
        theta: impl Into<NativeParam>,
        q0: u32,
        q1: u32,
    ) -> TranslateResult<&mut Self> {
        self.append(gate, vec![theta.into()], vec![q0, q1], vec![])
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// `qc.h(qubit)`
    pub fn h(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::H, qubit)
    }

    /// `qc.x(qubit)`
    pub fn x(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::X, qubit)
    }

    /// `qc.y(qubit)`
    pub fn y(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::Y, qubit)
    }

    /// `qc.z(qubit)`
    pub fn z(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::Z, qubit)
    }

    /// `qc.s(qubit)`
    pub fn s(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::S, qubit)
    }

    /// `qc.t(qubit)`
    pub fn t(&mut self, qubit: u32) -> TranslateResult<&mut Self> {
        self.gate1(NativeGate::T, qubit)
    }

    /// `qc.rx(theta, qubit)`
    pub fn rx(&mut self, theta: impl Into<NativeParam>, qubit: u32) -> TranslateResult<&mut Self> {
        self.rot1(NativeGate::Rx, theta, qubit)
    }

    /// `qc.ry(theta, qubit)`
    pub fn ry(&mut self, theta: impl Into<NativeParam>, qubit: u32) -> TranslateResult<&mut Self> {
        self.rot1(NativeGate::Ry, theta, qubit)
    }

    /// `qc.rz(phi, qubit)`
    pub fn rz(&mut self, phi: impl Into<NativeParam>, qubit: u32) -> TranslateResult<&mut Self> {
        self.rot1(NativeGate::Rz, phi, qubit)
    }

    /// `qc.p(theta, qubit)`
    pub fn p(&mut self, theta: impl Into<NativeParam>, qubit: u32) -> TranslateResult<&mut Self> {
        self.rot1(NativeGate::P, theta, qubit)
    }

    // =========================================================================
    // Two- and three-qubit gates
    // =========================================================================

    /// `qc.ch(control, target)`
    pub fn ch(&mut self, control: u32, target: u32) -> TranslateResult<&mut Self> {
        self.gate2(NativeGate::Ch, control, target)
    }

    /// `qc.cx(control, target)`
    pub fn cx(&mut self, control: u32, target: u32) -> TranslateResult<&mut Self> {
        self.gate2(NativeGate::Cx, control, target)
    }

    /// `qc.cy(control, target)`
    pub fn cy(&mut self, control: u32, target: u32) -> TranslateResult<&mut Self> {
        self.gate2(NativeGate::Cy, control, target)
    }

    /// `qc.cz(control, target)`
    pub fn cz(&mut self, control: u32, target: u32) -> TranslateResult<&mut Self> {
        self.gate2(NativeGate::Cz, control, target)
    }

    /// `qc.crx(theta, control, target)`
    pub fn crx(
        &mut self,
        theta: impl Into<NativeParam>,
        control: u32,
        target: u32,
    ) -> TranslateResult<&mut Self> {
        self.rot2(NativeGate::Crx, theta, control, target)
    }

    /// `qc.cry(theta, control, target)`
    pub fn cry(
        &mut self,
        theta: impl Into<NativeParam>,
        control: u32,
        target: u32,
    ) -> TranslateResult<&mut Self> {
        self.rot2(NativeGate::Cry, theta, control, target)
    }

    /// `qc.crz(theta, control, target)`
    pub fn crz(
        &mut self,
        theta: impl Into<NativeParam>,
        control: u32,
        target: u32,
    ) -> TranslateResult<&mut Self> {
        self.rot2(NativeGate::Crz, theta, control, target)
    }

    /// `qc.cp(theta, control, target)`
    pub fn cp(
        &mut self,
        theta: impl Into<NativeParam>,
        control: u32,
        target: u32,
    ) -> TranslateResult<&mut Self> {
        self.rot2(NativeGate::Cp, theta, control, target)
    }

    /// `qc.swap(qubit1, qubit2)`
    pub fn swap(&mut self, qubit1: u32, qubit2: u32) -> TranslateResult<&mut Self> {
        self.gate2(NativeGate::Swap, qubit1, qubit2)
    }

    /// `qc.rxx(theta, qubit1, qubit2)`
    pub fn rxx(
        &mut self,
        theta: impl Into<NativeParam>,
        qubit1: u32,
        qubit2: u32,
    ) -> TranslateResult<&mut Self> {
        self.rot2(NativeGate::Rxx, theta, qubit1, qubit2)
    }

    /// `qc.cswap(control, target1, target2)`
    pub fn cswap(&mut self, control: u32, target1: u32, target2: u32) -> TranslateResult<&mut Self> {
        self.append(NativeGate::Cswap, vec![], vec![control, target1, target2], vec![])
    }

    /// `qc.measure(qubit, cbit)`
    pub fn measure(&mut self, qubit: u32, cbit: u32) -> TranslateResult<&mut Self> {
        self.append(NativeGate::Measure, vec![], vec![qubit], vec![cbit])
    }
}

fn check_arity(
    gate: NativeGate,
    what: &'static str,
    expected: usize,
    got: usize,
) -> TranslateResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(TranslateError::Arity {
            gate: gate.name(),
            what,
            expected,
            got,
        })
    }
}

fn check_index(register: &'static str, index: u32, size: u32) -> TranslateResult<()> {
    if index < size {
        Ok(())
    } else {
        Err(TranslateError::IndexOutOfRange {
            register,
            index,
            size,
        })
    }
}
