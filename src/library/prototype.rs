use crate::types::ArgType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse role of a node, deciding which implicit flow pins it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Program entry point. One flow output.
    Event,
    /// One flow input, one flow output.
    Function,
    /// One flow input, two flow outputs (branch).
    Workflow,
    /// Pure data node without flow pins.
    #[serde(alias = "none")]
    Plain,
}

impl NodeKind {
    /// Number of implicit `(input, output)` flow pins.
    pub fn flow_pins(self) -> (usize, usize) {
        match self {
            NodeKind::Event => (0, 1),
            NodeKind::Function => (1, 1),
            NodeKind::Workflow => (1, 2),
            NodeKind::Plain => (0, 0),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Event => "event",
            NodeKind::Function => "function",
            NodeKind::Workflow => "workflow",
            NodeKind::Plain => "plain",
        };
        f.pad(name)
    }
}

/// A declared data argument of a prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub arg_type: ArgType,
}

/// An immutable catalog entry nodes are instantiated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePrototype {
    pub kind: NodeKind,
    /// Category ("filter") the prototype is listed under.
    pub category: String,
    pub name: String,
    /// Dense global index in declaration order.
    pub library_index: u32,
    pub inputs: Vec<ArgumentSpec>,
    pub outputs: Vec<ArgumentSpec>,
}

impl NodePrototype {
    /// `"<category>: <name>"`, the title shown on the node header.
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.category, self.name)
    }
}
