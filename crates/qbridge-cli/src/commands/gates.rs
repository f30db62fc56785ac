//! Gates command implementation.

use console::style;

use qbridge_adapter_qiskit::{native_gate, supported_gates};

/// Execute the gates command.
pub fn execute() {
    println!("{} Supported gates:\n", style("qiskit").cyan().bold());

    for name in supported_gates() {
        let Some(gate) = native_gate(name) else {
            continue;
        };
        let params = if gate.num_params() > 0 { " (θ)" } else { "" };
        println!(
            "  {:<8} → {}{}  {} qubit(s)",
            style(name).bold(),
            style(gate.name()).green(),
            params,
            gate.num_qubits()
        );
    }
}
