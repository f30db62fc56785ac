//! qbridge Command-Line Interface
//!
//! Translates qbridge circuits and qubit operators to and from the Qiskit
//! data model. Inputs and outputs are JSON files; circuits can also be
//! written as OpenQASM 2.0.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{OutputFormat, load_config};
use commands::{circuit, gates, operator, trim, version};

/// qbridge - translate quantum circuits and operators to and from Qiskit
#[derive(Parser)]
#[command(name = "qbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ~/.qbridge/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate an abstract circuit into a Qiskit circuit
    Circuit {
        /// Input circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (qasm, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Translate qubit operators
    Operator {
        #[command(subcommand)]
        action: OperatorAction,
    },

    /// Trim qubits a circuit leaves in a basis state
    Trim {
        /// Qubit operator (JSON)
        #[arg(long)]
        operator: String,

        /// Circuit (JSON)
        #[arg(long)]
        circuit: String,

        /// Rotations with a smaller angle are dropped first
        #[arg(long)]
        rotation_threshold: Option<f64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List supported gates and their Qiskit names
    Gates,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum OperatorAction {
    /// Qubit operator to Qiskit Pauli sum
    ToNative {
        /// Input operator (JSON)
        #[arg(short, long)]
        input: String,

        /// Register width (defaults to the operator's qubit count)
        #[arg(short, long)]
        n_qubits: Option<usize>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Qiskit Pauli sum to qubit operator
    FromNative {
        /// Input Pauli sum (JSON list of [label, [re, im]])
        #[arg(short, long)]
        input: String,

        /// Drop coefficients at or below this magnitude
        #[arg(long)]
        tolerance: Option<f64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Circuit {
            input,
            output,
            format,
        } => {
            let config = config.resolve(format, None, None);
            circuit::execute(&input, output.as_deref(), config.output)
        }

        Commands::Operator { action } => match action {
            OperatorAction::ToNative {
                input,
                n_qubits,
                output,
            } => operator::execute_to_native(&input, n_qubits, output.as_deref()),
            OperatorAction::FromNative {
                input,
                tolerance,
                output,
            } => {
                let config = config.resolve(None, tolerance, None);
                operator::execute_from_native(&input, config.compress_tolerance, output.as_deref())
            }
        },

        Commands::Trim {
            operator,
            circuit,
            rotation_threshold,
            output,
        } => {
            let config = config.resolve(None, None, rotation_threshold);
            trim::execute(
                &operator,
                &circuit,
                config.rotation_threshold,
                output.as_deref(),
            )
        }

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
