//! Operator command implementation.

use anyhow::{Context, Result};
use console::style;

use qbridge_adapter_qiskit::{translate_op_from_qiskit_with_tolerance, translate_op_to_qiskit};

use super::common::{load_operator, load_pauli_sum, write_output};

/// Execute `operator to-native`.
pub fn execute_to_native(input: &str, n_qubits: Option<usize>, output: Option<&str>) -> Result<()> {
    let op = load_operator(input)?;
    let n_qubits = n_qubits.unwrap_or_else(|| op.count_qubits());

    eprintln!(
        "{} Translating {} terms on {} qubits to qiskit",
        style("→").cyan().bold(),
        op.len(),
        n_qubits
    );

    let sum = translate_op_to_qiskit(&op, n_qubits).context("Translation failed")?;
    write_output(output, &serde_json::to_string_pretty(&sum)?)?;

    eprintln!("{} {} Pauli labels", style("✓").green().bold(), sum.len());
    Ok(())
}

/// Execute `operator from-native`.
pub fn execute_from_native(input: &str, tolerance: f64, output: Option<&str>) -> Result<()> {
    let sum = load_pauli_sum(input)?;

    eprintln!(
        "{} Translating {} Pauli labels on {} qubits from qiskit",
        style("→").cyan().bold(),
        sum.len(),
        sum.num_qubits()
    );

    let op = translate_op_from_qiskit_with_tolerance(&sum, tolerance)
        .context("Translation failed")?;
    write_output(output, &serde_json::to_string_pretty(&op)?)?;

    eprintln!("{} {} terms", style("✓").green().bold(), op.len());
    Ok(())
}
