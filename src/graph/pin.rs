use super::ids::{NodeHandle, PinId};
use crate::types::{ArgType, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinKind {
    Input,
    Output,
}

/// A typed connection point on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: PinId,
    pub name: String,
    arg_type: ArgType,
    pub(crate) kind: PinKind,
    pub(crate) node: Option<NodeHandle>,
    /// Only meaningful for unlinked data input pins.
    pub constant: Value,
}

impl Pin {
    pub(crate) fn new(id: PinId, name: &str, arg_type: ArgType, kind: PinKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            arg_type,
            kind,
            node: None,
            constant: Value::default_for(arg_type),
        }
    }

    pub fn arg_type(&self) -> ArgType {
        self.arg_type
    }

    pub fn kind(&self) -> PinKind {
        self.kind
    }

    /// Handle of the owning node, set once the pin is placed in a graph.
    pub fn node(&self) -> Option<NodeHandle> {
        self.node
    }

    pub fn is_flow(&self) -> bool {
        self.arg_type.is_flow()
    }

    /// Whether a link may join `a` and `b`, in either order.
    pub fn can_link(a: Option<&Pin>, b: Option<&Pin>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        a.id != b.id && a.kind != b.kind && a.arg_type == b.arg_type && a.node != b.node
    }
}
