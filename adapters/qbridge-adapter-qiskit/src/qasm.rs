//! OpenQASM 2.0 export for [`QuantumCircuit`], like `QuantumCircuit.qasm()`.

use std::f64::consts::PI;

use crate::native::{CircuitInstruction, NativeGate, NativeParam, QuantumCircuit};

impl QuantumCircuit {
    /// Emit the circuit as OpenQASM 2.0 against `qelib1.inc`.
    pub fn qasm(&self) -> String {
        let mut emitter = Qasm2Emitter::new();
        emitter.emit_circuit(self);
        emitter.output
    }
}

/// OpenQASM 2.0 emitter.
struct Qasm2Emitter {
    output: String,
}

impl Qasm2Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &QuantumCircuit) {
        self.writeln("OPENQASM 2.0;");
        self.writeln("include \"qelib1.inc\";");

        if circuit.num_qubits() > 0 {
            self.writeln(&format!("qreg q[{}];", circuit.num_qubits()));
        }
        if circuit.num_clbits() > 0 {
            self.writeln(&format!("creg c[{}];", circuit.num_clbits()));
        }

        for inst in circuit.data() {
            self.emit_instruction(inst);
        }
    }

    fn emit_instruction(&mut self, inst: &CircuitInstruction) {
        if inst.gate == NativeGate::Measure {
            for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                self.writeln(&format!("measure q[{q}] -> c[{c}];"));
            }
            return;
        }

        // qelib1.inc names the phase gates u1/cu1.
        let name = match inst.gate {
            NativeGate::P => "u1",
            NativeGate::Cp => "cu1",
            other => other.name(),
        };
        let qubits = self.emit_qubits(&inst.qubits);

        if inst.params.is_empty() {
            self.writeln(&format!("{name} {qubits};"));
        } else {
            let params: Vec<String> = inst.params.iter().map(|p| self.emit_param(p)).collect();
            self.writeln(&format!("{name}({}) {qubits};", params.join(",")));
        }
    }

    fn emit_qubits(&self, qubits: &[u32]) -> String {
        qubits
            .iter()
            .map(|q| format!("q[{q}]"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn emit_param(&self, param: &NativeParam) -> String {
        match param {
            NativeParam::Float(v) => {
                let v = *v;
                if (v - PI).abs() < 1e-10 {
                    "pi".into()
                } else if (v + PI).abs() < 1e-10 {
                    "-pi".into()
                } else if (v - PI / 2.0).abs() < 1e-10 {
                    "pi/2".into()
                } else if (v + PI / 2.0).abs() < 1e-10 {
                    "-pi/2".into()
                } else if (v - PI / 4.0).abs() < 1e-10 {
                    "pi/4".into()
                } else if (v + PI / 4.0).abs() < 1e-10 {
                    "-pi/4".into()
                } else {
                    format!("{v:.6}")
                }
            }
            NativeParam::Symbol(name) => name.clone(),
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
