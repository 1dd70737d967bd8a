use super::color::{Rgb, node_color};
use super::ids::{NodeId, PinId};
use super::pin::Pin;
use crate::library::{NodeKind, NodePrototype};
use std::sync::Arc;

/// A live instance of a catalog prototype.
///
/// Implicit flow pins always come first in `inputs` and `outputs`, followed by
/// one pin per declared argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    prototype: Arc<NodePrototype>,
    pub(crate) inputs: Vec<Pin>,
    pub(crate) outputs: Vec<Pin>,
}

impl Node {
    pub(crate) fn new(id: NodeId, prototype: Arc<NodePrototype>) -> Self {
        Self {
            id,
            name: prototype.display_name(),
            prototype,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn prototype(&self) -> &NodePrototype {
        &self.prototype
    }

    pub fn kind(&self) -> NodeKind {
        self.prototype.kind
    }

    pub fn library_index(&self) -> u32 {
        self.prototype.library_index
    }

    pub fn color(&self) -> Rgb {
        node_color(self.kind())
    }

    pub fn inputs(&self) -> &[Pin] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Pin] {
        &self.outputs
    }

    pub fn flow_inputs(&self) -> impl Iterator<Item = &Pin> {
        self.inputs.iter().filter(|p| p.is_flow())
    }

    pub fn flow_outputs(&self) -> impl Iterator<Item = &Pin> {
        self.outputs.iter().filter(|p| p.is_flow())
    }

    pub fn data_inputs(&self) -> impl Iterator<Item = &Pin> {
        self.inputs.iter().filter(|p| !p.is_flow())
    }

    pub fn data_outputs(&self) -> impl Iterator<Item = &Pin> {
        self.outputs.iter().filter(|p| !p.is_flow())
    }

    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.inputs.iter().chain(&self.outputs)
    }

    pub fn owns_pin(&self, pin: PinId) -> bool {
        self.pins().any(|p| p.id == pin)
    }

    pub(crate) fn pin_mut(&mut self, pin: PinId) -> Option<&mut Pin> {
        self.inputs
            .iter_mut()
            .chain(self.outputs.iter_mut())
            .find(|p| p.id == pin)
    }
}
