//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - circuit and operator translation for Qiskit",
        style("qbridge").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qbridge-ir              Abstract circuit representation");
    println!("  qbridge-ops             Qubit operators and trimming");
    println!("  qbridge-adapter-qiskit  Qiskit translation");
    println!("  qbridge-cli             Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
