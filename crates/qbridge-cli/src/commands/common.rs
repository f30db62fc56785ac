//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use qbridge_adapter_qiskit::PauliSumOp;
use qbridge_ir::{Circuit, DEFAULT_ROTATION_THRESHOLD};
use qbridge_ops::{DEFAULT_COMPRESS_TOLERANCE, QubitOperator};

/// Output format for translated circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// OpenQASM 2.0 text.
    #[default]
    Qasm,
    /// The instruction list as JSON.
    Json,
}

/// Settings read from `config.yaml`. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coefficients at or below this magnitude are dropped.
    pub compress_tolerance: f64,
    /// Rotations with a smaller angle are removed before trimming.
    pub rotation_threshold: f64,
    /// Default format for the `circuit` command.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compress_tolerance: DEFAULT_COMPRESS_TOLERANCE,
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
            output: OutputFormat::Qasm,
        }
    }
}

impl Config {
    /// Apply command-line flags on top of the loaded settings.
    ///
    /// A flag that was given wins over the config value.
    #[must_use]
    pub fn resolve(
        self,
        output: Option<OutputFormat>,
        compress_tolerance: Option<f64>,
        rotation_threshold: Option<f64>,
    ) -> Self {
        Self {
            compress_tolerance: compress_tolerance.unwrap_or(self.compress_tolerance),
            rotation_threshold: rotation_threshold.unwrap_or(self.rotation_threshold),
            output: output.unwrap_or(self.output),
        }
    }
}

/// Parse a YAML config document. Missing keys keep their defaults.
pub fn parse_config(source: &str) -> Result<Config> {
    if source.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml_ng::from_str(source).context("Invalid config file")
}

/// Return the default config path (~/.qbridge/config.yaml).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qbridge").join("config.yaml"))
}

/// Load the config from `path`, or from the default location if it exists.
///
/// An explicit path must exist; a missing default file means defaults.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let source = read_file(&path.to_string_lossy())?;
    let config = parse_config(&source)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Read a file to a string with a readable error.
pub fn read_file(path: &str) -> Result<String> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Load and validate an abstract circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let source = read_file(path)?;
    Circuit::from_json(&source).with_context(|| format!("Invalid circuit in {path}"))
}

/// Load a qubit operator from a JSON file.
pub fn load_operator(path: &str) -> Result<QubitOperator> {
    let source = read_file(path)?;
    serde_json::from_str(&source).with_context(|| format!("Invalid operator in {path}"))
}

/// Load a Qiskit Pauli sum from a JSON file.
pub fn load_pauli_sum(path: &str) -> Result<PauliSumOp> {
    let source = read_file(path)?;
    serde_json::from_str(&source).with_context(|| format!("Invalid Pauli sum in {path}"))
}

/// Write to `output`, or to stdout if no path is given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            println!("{}", content.trim_end());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.compress_tolerance, 1e-8);
        assert_eq!(config.rotation_threshold, 1e-3);
        assert_eq!(config.output, OutputFormat::Qasm);
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config("output: json\n").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.rotation_threshold, 1e-3);

        let config = parse_config("compress_tolerance: 1.0e-6\nrotation_threshold: 0.01\n").unwrap();
        assert_eq!(config.compress_tolerance, 1e-6);
        assert_eq!(config.rotation_threshold, 0.01);
    }

    #[test]
    fn test_empty_and_invalid_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert!(parse_config("output: pdf\n").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let loaded = parse_config("output: json\nrotation_threshold: 0.05\n").unwrap();

        let resolved = loaded.clone().resolve(Some(OutputFormat::Qasm), None, Some(0.2));
        assert_eq!(resolved.output, OutputFormat::Qasm);
        assert_eq!(resolved.rotation_threshold, 0.2);
        assert_eq!(resolved.compress_tolerance, 1e-8);

        let untouched = loaded.clone().resolve(None, None, None);
        assert_eq!(untouched, loaded);
    }

    #[test]
    fn test_load_config_file_then_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "compress_tolerance: 1.0e-4\noutput: json\n").unwrap();

        let config = load_config(Some(&path.to_string_lossy())).unwrap();
        assert_eq!(config.compress_tolerance, 1e-4);
        assert_eq!(config.output, OutputFormat::Json);

        let config = config.resolve(None, Some(1e-10), None);
        assert_eq!(config.compress_tolerance, 1e-10);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("/nonexistent/qbridge.yaml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
