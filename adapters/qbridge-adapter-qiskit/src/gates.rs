//! Abstract gate name to Qiskit gate table.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::native::NativeGate;

static QISKIT_GATES: LazyLock<FxHashMap<&'static str, NativeGate>> = LazyLock::new(|| {
    let mut m = FxHashMap::default();
    m.insert("H", NativeGate::H);
    m.insert("X", NativeGate::X);
    m.insert("Y", NativeGate::Y);
    m.insert("Z", NativeGate::Z);
    m.insert("S", NativeGate::S);
    m.insert("T", NativeGate::T);
    m.insert("CH", NativeGate::Ch);
    m.insert("CX", NativeGate::Cx);
    m.insert("CY", NativeGate::Cy);
    m.insert("CZ", NativeGate::Cz);
    m.insert("CNOT", NativeGate::Cx);
    m.insert("RX", NativeGate::Rx);
    m.insert("RY", NativeGate::Ry);
    m.insert("RZ", NativeGate::Rz);
    m.insert("CRX", NativeGate::Crx);
    m.insert("CRY", NativeGate::Cry);
    m.insert("CRZ", NativeGate::Crz);
    m.insert("SWAP", NativeGate::Swap);
    m.insert("XX", NativeGate::Rxx);
    m.insert("CSWAP", NativeGate::Cswap);
    m.insert("PHASE", NativeGate::P);
    m.insert("CPHASE", NativeGate::Cp);
    m.insert("MEASURE", NativeGate::Measure);
    m
});

/// The supported abstract gate names and the Qiskit gate each becomes.
pub fn qiskit_gates() -> &'static FxHashMap<&'static str, NativeGate> {
    &QISKIT_GATES
}

/// Look up the Qiskit gate for an abstract gate name.
pub fn native_gate(name: &str) -> Option<NativeGate> {
    QISKIT_GATES.get(name).copied()
}

/// Supported abstract names, sorted.
pub fn supported_gates() -> Vec<&'static str> {
    let mut names: Vec<_> = QISKIT_GATES.keys().copied().collect();
    names.sort_unstable();
    names
}
