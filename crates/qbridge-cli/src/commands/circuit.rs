//! Circuit command implementation.

use anyhow::{Context, Result};
use console::style;

use qbridge_adapter_qiskit::translate_qiskit;

use super::common::{OutputFormat, load_circuit, write_output};

/// Execute the circuit command.
pub fn execute(input: &str, output: Option<&str>, format: OutputFormat) -> Result<()> {
    eprintln!(
        "{} Translating {} to qiskit",
        style("→").cyan().bold(),
        style(input).green()
    );

    let circuit = load_circuit(input)?;
    eprintln!(
        "  Loaded: {} qubits, {} gates",
        circuit.width(),
        circuit.size()
    );

    let qc = translate_qiskit(&circuit).context("Translation failed")?;

    let content = match format {
        OutputFormat::Qasm => qc.qasm(),
        OutputFormat::Json => serde_json::to_string_pretty(&qc)?,
    };
    write_output(output, &content)?;

    eprintln!(
        "{} Translated {} instructions",
        style("✓").green().bold(),
        qc.size()
    );
    if let Some(path) = output {
        eprintln!("  Output: {}", style(path).green());
    }
    Ok(())
}
