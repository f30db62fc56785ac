//! Abstract circuit to Qiskit circuit translation.

use qbridge_ir::{Circuit, Gate, QubitId};
use tracing::{debug, trace};

use crate::error::{TranslateError, TranslateResult};
use crate::gates::native_gate;
use crate::native::{NativeGate, NativeParam, QuantumCircuit};

/// Translate an abstract circuit into a Qiskit `QuantumCircuit`.
///
/// The result has `circuit.width()` qubits and as many classical bits.
/// Qubit indices carry over unchanged. Gates with more than one control
/// are rejected, as are names missing from
/// [`qiskit_gates`](crate::gates::qiskit_gates).
pub fn translate_qiskit(circuit: &Circuit) -> TranslateResult<QuantumCircuit> {
    let width = circuit.width();
    let size = u32::try_from(width).map_err(|_| TranslateError::TooManyQubits(width))?;
    let mut target = QuantumCircuit::new(size, size);

    for gate in circuit.gates() {
        translate_gate(&mut target, gate)?;
    }

    debug!(
        num_qubits = size,
        gates_in = circuit.size(),
        gates_out = target.size(),
        "translated circuit to qiskit"
    );
    Ok(target)
}

fn translate_gate(qc: &mut QuantumCircuit, gate: &Gate) -> TranslateResult<()> {
    let controls = gate.controls();
    if controls.len() > 1 {
        return Err(TranslateError::MultiControlled {
            gate: gate.name.clone(),
            controls: controls.iter().map(|q| q.0).collect(),
        });
    }

    let native =
        native_gate(&gate.name).ok_or_else(|| TranslateError::UnsupportedGate(gate.name.clone()))?;
    trace!(gate = %gate, native = native.name(), "translating gate");

    match native {
        NativeGate::H
        | NativeGate::X
        | NativeGate::Y
        | NativeGate::Z
        | NativeGate::S
        | NativeGate::T => {
            no_control(gate)?;
            let [t0] = targets::<1>(gate)?;
            qc.append(native, vec![], vec![t0], vec![])?;
        }
        NativeGate::Rx | NativeGate::Ry | NativeGate::Rz | NativeGate::P => {
            no_control(gate)?;
            let theta = param(gate)?;
            let [t0] = targets::<1>(gate)?;
            qc.append(native, vec![theta], vec![t0], vec![])?;
        }
        NativeGate::Crx | NativeGate::Cry | NativeGate::Crz | NativeGate::Cp => {
            let theta = param(gate)?;
            let c0 = control(gate)?;
            let [t0] = targets::<1>(gate)?;
            qc.append(native, vec![theta], vec![c0, t0], vec![])?;
        }
        NativeGate::Ch | NativeGate::Cx | NativeGate::Cy | NativeGate::Cz => {
            let c0 = control(gate)?;
            let [t0] = targets::<1>(gate)?;
            qc.append(native, vec![], vec![c0, t0], vec![])?;
        }
        NativeGate::Swap => {
            no_control(gate)?;
            let [t0, t1] = targets::<2>(gate)?;
            qc.swap(t0, t1)?;
        }
        NativeGate::Cswap => {
            let c0 = control(gate)?;
            let [t0, t1] = targets::<2>(gate)?;
            qc.cswap(c0, t0, t1)?;
        }
        NativeGate::Rxx => {
            no_control(gate)?;
            let theta = param(gate)?;
            let [t0, t1] = targets::<2>(gate)?;
            qc.rxx(theta, t0, t1)?;
        }
        NativeGate::Measure => {
            no_control(gate)?;
            let [t0] = targets::<1>(gate)?;
            qc.measure(t0, t0)?;
        }
    }
    Ok(())
}

/// The first `N` targets. Extra targets are ignored.
fn targets<const N: usize>(gate: &Gate) -> TranslateResult<[u32; N]> {
    if gate.target.len() < N {
        return Err(TranslateError::TargetCount {
            gate: gate.name.clone(),
            expected: N,
            got: gate.target.len(),
        });
    }
    let mut out = [0u32; N];
    for (slot, q) in out.iter_mut().zip(&gate.target) {
        *slot = q.0;
    }
    Ok(out)
}

fn control(gate: &Gate) -> TranslateResult<u32> {
    gate.controls()
        .first()
        .map(|&QubitId(q)| q)
        .ok_or_else(|| TranslateError::MissingControl(gate.name.clone()))
}

fn no_control(gate: &Gate) -> TranslateResult<()> {
    if gate.controls().is_empty() {
        Ok(())
    } else {
        Err(TranslateError::UnexpectedControl(gate.name.clone()))
    }
}

fn param(gate: &Gate) -> TranslateResult<NativeParam> {
    gate.parameter
        .as_ref()
        .map(NativeParam::from)
        .ok_or_else(|| TranslateError::MissingParameter(gate.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbridge_ir::Parameter;

    fn q(i: u32) -> QubitId {
        QubitId(i)
    }

    #[test]
    fn test_bell_with_measure() {
        let circuit = Circuit::new([
            Gate::single("H", q(0)),
            Gate::single("CNOT", q(1)).with_control([q(0)]),
            Gate::single("MEASURE", q(0)),
            Gate::single("MEASURE", q(1)),
        ])
        .unwrap();

        let qc = translate_qiskit(&circuit).unwrap();
        assert_eq!(qc.num_qubits(), 2);
        assert_eq!(qc.num_clbits(), 2);
        assert_eq!(qc.data()[1].gate, NativeGate::Cx);
        assert_eq!(qc.data()[1].qubits, vec![0, 1]);
        assert_eq!(qc.data()[3].qubits, vec![1]);
        assert_eq!(qc.data()[3].clbits, vec![1]);
    }

    #[test]
    fn test_target_count() {
        // The IR accepts a one-target CSWAP; the arity check lives here.
        let circuit = Circuit::new([Gate::single("CSWAP", q(1)).with_control([q(0)])]).unwrap();
        assert!(matches!(
            translate_qiskit(&circuit),
            Err(TranslateError::TargetCount { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_argument_order() {
        let circuit = Circuit::new([
            Gate::single("CRZ", q(0)).with_control([q(2)]).with_parameter(0.25),
            Gate::new("CSWAP", [q(1), q(2)]).with_control([q(0)]),
            Gate::new("XX", [q(2), q(1)]).with_parameter(Parameter::symbol("theta")),
        ])
        .unwrap();
        let qc = translate_qiskit(&circuit).unwrap();
        let data = qc.data();
        assert_eq!(data[0].qubits, vec![2, 0]);
        assert_eq!(data[0].params, vec![NativeParam::Float(0.25)]);
        assert_eq!(data[1].qubits, vec![0, 1, 2]);
        assert_eq!(data[2].gate, NativeGate::Rxx);
        assert_eq!(data[2].qubits, vec![2, 1]);
        assert_eq!(data[2].params, vec![NativeParam::Symbol("theta".into())]);
    }

    #[test]
    fn test_multi_control_checked_first() {
        // An unsupported name with two controls still reports the controls.
        let circuit = Circuit::new([Gate::single("TOFFOLI", q(2)).with_control([q(0), q(1)])])
            .unwrap();
        let err = translate_qiskit(&circuit).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::MultiControlled { ref controls, .. } if controls == &[0, 1]
        ));
        assert!(err.to_string().contains("Multi-controlled gates not supported with qiskit"));
    }

    #[test]
    fn test_unsupported_gate() {
        let circuit = Circuit::new([Gate::single("SQRTX", q(0))]).unwrap();
        let err = translate_qiskit(&circuit).unwrap_err();
        assert_eq!(err.to_string(), "Gate 'SQRTX' not supported on backend qiskit");
    }

    #[test]
    fn test_control_shape_errors() {
        let circuit = Circuit::new([Gate::single("CX", q(1))]).unwrap();
        assert!(matches!(
            translate_qiskit(&circuit),
            Err(TranslateError::MissingControl(_))
        ));

        let circuit = Circuit::new([Gate::single("H", q(1)).with_control([q(0)])]).unwrap();
        assert!(matches!(
            translate_qiskit(&circuit),
            Err(TranslateError::UnexpectedControl(_))
        ));
    }

    #[test]
    fn test_width_from_n_qubits() {
        let circuit = Circuit::with_n_qubits([Gate::single("X", q(0))], 4).unwrap();
        let qc = translate_qiskit(&circuit).unwrap();
        assert_eq!(qc.num_qubits(), 4);
        assert_eq!(qc.num_clbits(), 4);
    }

    #[test]
    fn test_empty_circuit() {
        let qc = translate_qiskit(&Circuit::default()).unwrap();
        assert_eq!(qc.num_qubits(), 0);
        assert_eq!(qc.size(), 0);
    }
}
