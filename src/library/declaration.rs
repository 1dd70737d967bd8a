use super::prototype::NodeKind;
use crate::types::ArgType;
use serde::{Deserialize, Serialize};

/// One entry of the declarative node list the catalog is built from.
///
/// Names and types are listed separately, matching the external list format;
/// their lengths must agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrototypeDeclaration {
    pub kind: NodeKind,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub input_types: Vec<ArgType>,
    #[serde(default)]
    pub output_types: Vec<ArgType>,
    #[serde(default)]
    pub input_names: Vec<String>,
    #[serde(default)]
    pub output_names: Vec<String>,
}

impl PrototypeDeclaration {
    pub fn new(
        kind: NodeKind,
        category: &str,
        name: &str,
        inputs: &[(&str, ArgType)],
        outputs: &[(&str, ArgType)],
    ) -> Self {
        Self {
            kind,
            category: category.to_string(),
            name: name.to_string(),
            input_types: inputs.iter().map(|(_, t)| *t).collect(),
            output_types: outputs.iter().map(|(_, t)| *t).collect(),
            input_names: inputs.iter().map(|(n, _)| n.to_string()).collect(),
            output_names: outputs.iter().map(|(n, _)| n.to_string()).collect(),
        }
    }
}
