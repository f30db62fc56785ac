//! Trim command implementation.

use anyhow::{Context, Result};
use console::style;
use serde_json::json;

use qbridge_ops::trim_trivial_qubits;

use super::common::{load_circuit, load_operator, write_output};

/// Execute the trim command.
///
/// Writes `{"circuit": ..., "operator": ...}` with both parts trimmed.
pub fn execute(
    operator: &str,
    circuit: &str,
    rotation_threshold: f64,
    output: Option<&str>,
) -> Result<()> {
    let op = load_operator(operator)?;
    let circ = load_circuit(circuit)?;

    eprintln!(
        "{} Trimming {} qubits, {} terms",
        style("→").cyan().bold(),
        circ.width(),
        op.len()
    );

    let (trimmed_circuit, trimmed_op) =
        trim_trivial_qubits(&op, &circ, rotation_threshold).context("Trimming failed")?;

    let content = serde_json::to_string_pretty(&json!({
        "circuit": trimmed_circuit,
        "operator": trimmed_op,
    }))?;
    write_output(output, &content)?;

    eprintln!(
        "{} {} qubits remain, {} gates, {} terms",
        style("✓").green().bold(),
        trimmed_circuit.width(),
        trimmed_circuit.size(),
        trimmed_op.len()
    );
    Ok(())
}
