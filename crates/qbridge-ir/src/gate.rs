//! Abstract gate type.
//!
//! Gates are identified by upper-case names (`"H"`, `"CNOT"`, `"RX"`, ...).
//! The IR keeps the name as a string: each backend decides which names it
//! supports and rejects the rest at translation time.

use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::parameter::Parameter;
use crate::qubit::QubitId;

/// Gates that take a single angle parameter.
pub const PARAMETERIZED_GATES: &[&str] =
    &["RX", "RY", "RZ", "PHASE", "CRX", "CRY", "CRZ", "CPHASE", "XX"];

/// Gates that are their own inverse.
const SELF_INVERSE_GATES: &[&str] = &[
    "H", "X", "Y", "Z", "CNOT", "CX", "CY", "CZ", "CH", "SWAP", "CSWAP",
];

/// A gate of the abstract circuit format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Gate name, e.g. `"CNOT"`.
    pub name: String,
    /// Target qubits.
    #[serde(deserialize_with = "one_or_many")]
    pub target: Vec<QubitId>,
    /// Control qubits, if the gate is controlled.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_one_or_many"
    )]
    pub control: Option<Vec<QubitId>>,
    /// Angle parameter for rotation-type gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Parameter>,
    /// Whether the parameter is meant to be optimized variationally.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_variational: bool,
}

impl Gate {
    /// Create a gate acting on the given target(s).
    pub fn new(name: impl Into<String>, target: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            name: name.into(),
            target: target.into_iter().collect(),
            control: None,
            parameter: None,
            is_variational: false,
        }
    }

    /// Create a gate acting on a single target.
    pub fn single(name: impl Into<String>, target: QubitId) -> Self {
        Self::new(name, [target])
    }

    /// Add control qubits.
    #[must_use]
    pub fn with_control(mut self, control: impl IntoIterator<Item = QubitId>) -> Self {
        self.control = Some(control.into_iter().collect());
        self
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<Parameter>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Mark the gate's parameter as variational.
    #[must_use]
    pub fn variational(mut self) -> Self {
        self.is_variational = true;
        self
    }

    /// Control qubits, empty if uncontrolled.
    pub fn controls(&self) -> &[QubitId] {
        self.control.as_deref().unwrap_or_default()
    }

    /// All qubits touched by the gate: controls first, then targets.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls().iter().chain(self.target.iter()).copied()
    }

    /// Number of qubits touched by the gate.
    pub fn num_qubits(&self) -> usize {
        self.controls().len() + self.target.len()
    }

    /// Check if the gate's name belongs to the parameterized set.
    pub fn is_parameterized(&self) -> bool {
        PARAMETERIZED_GATES.contains(&self.name.as_str())
    }

    /// Check structural validity: at least one target, no repeated qubit and
    /// a parameter present on parameterized gates.
    pub fn validate(&self) -> IrResult<()> {
        if self.target.is_empty() {
            return Err(IrError::NoTarget {
                gate_name: self.name.clone(),
            });
        }

        let mut seen: Vec<QubitId> = Vec::with_capacity(self.num_qubits());
        for q in self.qubits() {
            if seen.contains(&q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    gate_name: Some(self.name.clone()),
                });
            }
            seen.push(q);
        }

        if self.is_parameterized() && self.parameter.is_none() {
            return Err(IrError::MissingParameter(self.name.clone()));
        }
        Ok(())
    }

    /// Return the inverse gate.
    pub fn inverse(&self) -> IrResult<Gate> {
        let name = self.name.as_str();

        if SELF_INVERSE_GATES.contains(&name) {
            return Ok(self.clone());
        }

        if self.is_parameterized() {
            let parameter = self
                .parameter
                .as_ref()
                .ok_or_else(|| IrError::MissingParameter(self.name.clone()))?;
            let mut inv = self.clone();
            inv.parameter = Some(parameter.negated());
            return Ok(inv);
        }

        let angle = match name {
            "S" => -PI / 2.0,
            "T" => -PI / 4.0,
            _ => return Err(IrError::NotInvertible(self.name.clone())),
        };
        Ok(Gate {
            name: "PHASE".into(),
            target: self.target.clone(),
            control: self.control.clone(),
            parameter: Some(Parameter::Value(angle)),
            is_variational: false,
        })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write!(f, "  target : {:?}", self.target.iter().map(|q| q.0).collect::<Vec<_>>())?;
        if let Some(control) = &self.control {
            write!(f, "  control : {:?}", control.iter().map(|q| q.0).collect::<Vec<_>>())?;
        }
        if let Some(parameter) = &self.parameter {
            write!(f, "  parameter : {parameter}")?;
        }
        if self.is_variational {
            write!(f, "\t (variational)")?;
        }
        Ok(())
    }
}

/// Accept either a single index or a list of indices.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(QubitId),
    Many(Vec<QubitId>),
}

impl From<OneOrMany> for Vec<QubitId> {
    fn from(v: OneOrMany) -> Self {
        match v {
            OneOrMany::One(q) => vec![q],
            OneOrMany::Many(qs) => qs,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<QubitId>, D::Error>
where
    D: Deserializer<'de>,
{
    OneOrMany::deserialize(deserializer).map(Into::into)
}

fn optional_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<QubitId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<OneOrMany>::deserialize(deserializer).map(|v| v.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_builder() {
        let g = Gate::single("CRZ", QubitId(1))
            .with_control([QubitId(0)])
            .with_parameter(0.3)
            .variational();
        assert_eq!(g.num_qubits(), 2);
        assert_eq!(g.qubits().collect::<Vec<_>>(), vec![QubitId(0), QubitId(1)]);
        assert!(g.is_parameterized());
        assert!(g.is_variational);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_qubit() {
        let g = Gate::single("CNOT", QubitId(1)).with_control([QubitId(1)]);
        assert!(matches!(
            g.validate(),
            Err(IrError::DuplicateQubit { qubit: QubitId(1), .. })
        ));
    }

    #[test]
    fn test_validate_missing_parameter() {
        let g = Gate::single("RX", QubitId(0));
        assert!(matches!(g.validate(), Err(IrError::MissingParameter(_))));
    }

    #[test]
    fn test_validate_no_target() {
        let g = Gate::new("H", []);
        assert!(matches!(g.validate(), Err(IrError::NoTarget { .. })));
    }

    #[test]
    fn test_inverse() {
        let h = Gate::single("H", QubitId(0));
        assert_eq!(h.inverse().unwrap(), h);

        let rx = Gate::single("RX", QubitId(0)).with_parameter(0.5);
        assert_eq!(rx.inverse().unwrap().parameter, Some(Parameter::Value(-0.5)));

        let s_inv = Gate::single("S", QubitId(2)).inverse().unwrap();
        assert_eq!(s_inv.name, "PHASE");
        assert_eq!(s_inv.target, vec![QubitId(2)]);
        assert_eq!(s_inv.parameter, Some(Parameter::Value(-PI / 2.0)));

        let m = Gate::single("MEASURE", QubitId(0));
        assert!(matches!(m.inverse(), Err(IrError::NotInvertible(_))));
    }

    #[test]
    fn test_deserialize_scalar_target() {
        let g: Gate =
            serde_json::from_str(r#"{"name": "CNOT", "target": 2, "control": 0}"#).unwrap();
        assert_eq!(g.target, vec![QubitId(2)]);
        assert_eq!(g.control, Some(vec![QubitId(0)]));

        let g: Gate = serde_json::from_str(
            r#"{"name": "XX", "target": [0, 1], "parameter": 0.5, "is_variational": true}"#,
        )
        .unwrap();
        assert_eq!(g.target, vec![QubitId(0), QubitId(1)]);
        assert!(g.control.is_none());
        assert!(g.is_variational);
    }

    #[test]
    fn test_serialize_omits_defaults() {
        let json = serde_json::to_string(&Gate::single("H", QubitId(0))).unwrap();
        assert_eq!(json, r#"{"name":"H","target":[0]}"#);
    }
}
