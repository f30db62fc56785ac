//! CLI command parsing and file-handling tests.
//!
//! The CLI is a binary crate, so argument parsing is checked against a
//! mirror of its clap structs, and the file round trips go through the
//! library crates the commands call.

// ============================================================================
// File round trips
// ============================================================================

mod file_round_trips {
    use std::fs;

    use qbridge_adapter_qiskit::{
        PauliSumOp, translate_op_from_qiskit, translate_op_to_qiskit, translate_qiskit,
    };
    use qbridge_ir::Circuit;
    use qbridge_ops::QubitOperator;

    #[test]
    fn test_circuit_file_to_qasm() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bell.json");
        fs::write(
            &input,
            r#"{"gates": [
                {"name": "H", "target": 0},
                {"name": "CNOT", "target": 1, "control": 0}
            ]}"#,
        )
        .unwrap();

        let circuit = Circuit::from_json(&fs::read_to_string(&input).unwrap()).unwrap();
        let qasm = translate_qiskit(&circuit).unwrap().qasm();

        let output = dir.path().join("bell.qasm");
        fs::write(&output, &qasm).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("OPENQASM 2.0;"));
        assert!(written.contains("cx q[0],q[1];"));
    }

    #[test]
    fn test_invalid_circuit_json() {
        // Duplicate qubit between control and target.
        let result = Circuit::from_json(r#"{"gates": [{"name": "CX", "target": 0, "control": 0}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_operator_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("op.json");
        let doc = serde_json::json!([
            {"term": "Z0", "coefficient": [0.5, 0.0]},
            {"term": "X0 X2", "coefficient": [0.0, -0.25]},
        ]);
        fs::write(&input, doc.to_string()).unwrap();

        let op: QubitOperator =
            serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
        let sum = translate_op_to_qiskit(&op, op.count_qubits()).unwrap();

        let native = dir.path().join("native.json");
        fs::write(&native, serde_json::to_string_pretty(&sum).unwrap()).unwrap();

        let parsed: PauliSumOp =
            serde_json::from_str(&fs::read_to_string(&native).unwrap()).unwrap();
        assert_eq!(parsed.num_qubits(), 3);
        let back = translate_op_from_qiskit(&parsed).unwrap();
        assert!(back.approx_eq(&op, 1e-12));
    }

    #[test]
    fn test_mismatched_label_widths_rejected() {
        let result: Result<PauliSumOp, _> =
            serde_json::from_str(r#"[["XZ", [1.0, 0.0]], ["X", [1.0, 0.0]]]"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("expected 2"));
    }
}

// ============================================================================
// Config files
// ============================================================================

mod config_files {
    use serde::Deserialize;
    use std::fs;

    /// Mirror of the CLI config.
    #[derive(Debug, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        compress_tolerance: f64,
        rotation_threshold: f64,
        output: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                compress_tolerance: 1e-8,
                rotation_threshold: 1e-3,
                output: "qasm".into(),
            }
        }
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "rotation_threshold: 0.05\noutput: json\n").unwrap();

        let config: TestConfig =
            serde_yaml_ng::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.rotation_threshold, 0.05);
        assert_eq!(config.compress_tolerance, 1e-8);
        assert_eq!(config.output, "json");
    }
}

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand, ValueEnum};

    #[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
    enum TestFormat {
        Qasm,
        Json,
    }

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qbridge")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(long, global = true)]
        config: Option<String>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Circuit {
            #[arg(short, long)]
            input: String,
            #[arg(short, long)]
            output: Option<String>,
            #[arg(short, long, value_enum)]
            format: Option<TestFormat>,
        },
        Operator {
            #[command(subcommand)]
            action: TestOperatorAction,
        },
        Trim {
            #[arg(long)]
            operator: String,
            #[arg(long)]
            circuit: String,
            #[arg(long)]
            rotation_threshold: Option<f64>,
            #[arg(short, long)]
            output: Option<String>,
        },
        Gates,
        Version,
    }

    #[derive(Subcommand)]
    enum TestOperatorAction {
        ToNative {
            #[arg(short, long)]
            input: String,
            #[arg(short, long)]
            n_qubits: Option<usize>,
            #[arg(short, long)]
            output: Option<String>,
        },
        FromNative {
            #[arg(short, long)]
            input: String,
            #[arg(long)]
            tolerance: Option<f64>,
            #[arg(short, long)]
            output: Option<String>,
        },
    }

    #[test]
    fn test_circuit_args() {
        let cli = TestCli::try_parse_from([
            "qbridge", "circuit", "-i", "c.json", "-o", "c.qasm", "--format", "qasm",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Circuit {
                input,
                output,
                format,
            } => {
                assert_eq!(input, "c.json");
                assert_eq!(output.as_deref(), Some("c.qasm"));
                assert_eq!(format, Some(TestFormat::Qasm));
            }
            _ => panic!("expected circuit"),
        }
    }

    #[test]
    fn test_circuit_requires_input() {
        assert!(TestCli::try_parse_from(["qbridge", "circuit"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(
            TestCli::try_parse_from(["qbridge", "circuit", "-i", "c.json", "-f", "pdf"]).is_err()
        );
    }

    #[test]
    fn test_operator_to_native_args() {
        let cli =
            TestCli::try_parse_from(["qbridge", "operator", "to-native", "-i", "h.json", "-n", "4"])
                .unwrap();
        match cli.command {
            TestCommands::Operator {
                action: TestOperatorAction::ToNative { n_qubits, .. },
            } => assert_eq!(n_qubits, Some(4)),
            _ => panic!("expected operator to-native"),
        }
    }

    #[test]
    fn test_operator_from_native_args() {
        let cli = TestCli::try_parse_from([
            "qbridge",
            "operator",
            "from-native",
            "-i",
            "p.json",
            "--tolerance",
            "1e-6",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Operator {
                action: TestOperatorAction::FromNative { tolerance, .. },
            } => assert_eq!(tolerance, Some(1e-6)),
            _ => panic!("expected operator from-native"),
        }
    }

    #[test]
    fn test_trim_args_and_global_flags() {
        let cli = TestCli::try_parse_from([
            "qbridge",
            "trim",
            "--operator",
            "h.json",
            "--circuit",
            "c.json",
            "-vv",
            "--config",
            "cfg.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("cfg.yaml"));
        assert!(matches!(
            cli.command,
            TestCommands::Trim {
                rotation_threshold: None,
                ..
            }
        ));
    }

    #[test]
    fn test_simple_commands() {
        assert!(matches!(
            TestCli::try_parse_from(["qbridge", "gates"]).unwrap().command,
            TestCommands::Gates
        ));
        assert!(matches!(
            TestCli::try_parse_from(["qbridge", "version"]).unwrap().command,
            TestCommands::Version
        ));
    }
}
