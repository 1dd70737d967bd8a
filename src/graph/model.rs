use super::color::pin_color;
use super::ids::{LinkId, NodeHandle, NodeId, PinId};
use super::link::Link;
use super::node::Node;
use super::pin::{Pin, PinKind};
use crate::error::GraphError;
use crate::library::NodePrototype;
use crate::types::{ArgType, Value};
use std::sync::Arc;

/// The live node/link graph the editor mutates.
///
/// Nodes, pins and links draw their ids from one shared counter starting at 1.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    links: Vec<Link>,
    next_id: u32,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            next_id: 1,
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh id.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle.0)
    }

    pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + use<> {
        (0..self.nodes.len()).map(NodeHandle)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_node(&self, id: NodeId) -> Option<NodeHandle> {
        self.nodes.iter().position(|n| n.id == id).map(NodeHandle)
    }

    pub fn find_pin(&self, id: PinId) -> Option<&Pin> {
        self.nodes.iter().flat_map(Node::pins).find(|p| p.id == id)
    }

    fn find_pin_mut(&mut self, id: PinId) -> Option<&mut Pin> {
        self.nodes.iter_mut().find_map(|n| n.pin_mut(id))
    }

    pub fn find_link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn is_pin_linked(&self, pin: PinId) -> bool {
        self.links.iter().any(|l| l.touches(pin))
    }

    /// Links leaving an output pin, in creation order.
    pub fn links_from(&self, pin: PinId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.start == pin)
    }

    /// Links arriving at an input pin, in creation order. More than one means fan-in.
    pub fn links_into(&self, pin: PinId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.end == pin)
    }

    /// The node at the far end of the first link leaving `pin`.
    pub fn find_end_node(&self, pin: PinId) -> Option<NodeHandle> {
        let link = self.links_from(pin).next()?;
        self.find_pin(link.end)?.node()
    }

    pub fn can_create_link(&self, a: PinId, b: PinId) -> bool {
        Pin::can_link(self.find_pin(a), self.find_pin(b))
    }

    /// Links two pins given in either order; the stored link always runs
    /// output to input.
    pub fn create_link(&mut self, a: PinId, b: PinId) -> Result<LinkId, GraphError> {
        let pin_a = self.find_pin(a).ok_or(GraphError::PinNotFound(a))?;
        let pin_b = self.find_pin(b).ok_or(GraphError::PinNotFound(b))?;
        if !Pin::can_link(Some(pin_a), Some(pin_b)) {
            return Err(GraphError::LinkRejected { start: a, end: b });
        }

        let (start, end) = match pin_a.kind() {
            PinKind::Output => (pin_a, pin_b),
            PinKind::Input => (pin_b, pin_a),
        };
        let (start, end, color) = (start.id, end.id, pin_color(start.arg_type()));

        let id = LinkId(self.next_id());
        self.links.push(Link {
            id,
            start,
            end,
            color,
        });
        Ok(id)
    }

    pub fn remove_link(&mut self, id: LinkId) -> Result<Link, GraphError> {
        let index = self
            .links
            .iter()
            .position(|l| l.id == id)
            .ok_or(GraphError::LinkNotFound(id))?;
        Ok(self.links.remove(index))
    }

    /// Instantiates `prototype` under `id`: implicit flow pins first, then
    /// one pin per declared argument, each with a fresh id.
    pub fn spawn_node_from_library(
        &mut self,
        prototype: &Arc<NodePrototype>,
        id: NodeId,
    ) -> NodeHandle {
        let mut node = Node::new(id, Arc::clone(prototype));
        let (flow_in, flow_out) = prototype.kind.flow_pins();

        for _ in 0..flow_in {
            let pin = PinId(self.next_id());
            node.inputs.push(Pin::new(pin, "", ArgType::None, PinKind::Input));
        }
        for _ in 0..flow_out {
            let pin = PinId(self.next_id());
            node.outputs.push(Pin::new(pin, "", ArgType::None, PinKind::Output));
        }
        for arg in &prototype.inputs {
            let pin = PinId(self.next_id());
            node.inputs.push(Pin::new(pin, &arg.name, arg.arg_type, PinKind::Input));
        }
        for arg in &prototype.outputs {
            let pin = PinId(self.next_id());
            node.outputs.push(Pin::new(pin, &arg.name, arg.arg_type, PinKind::Output));
        }

        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(node);
        self.rebuild_node(handle);
        handle
    }

    /// Allocates a node id and spawns `prototype` under it.
    pub fn spawn_node(&mut self, prototype: &Arc<NodePrototype>) -> NodeHandle {
        let id = NodeId(self.next_id());
        self.spawn_node_from_library(prototype, id)
    }

    /// Removes a node together with every link touching its pins.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let handle = self.find_node(id).ok_or(GraphError::NodeNotFound(id))?;
        let node = self.nodes.remove(handle.0);
        self.links
            .retain(|link| !node.owns_pin(link.start) && !node.owns_pin(link.end));
        self.rebuild_pin_owners();
        Ok(node)
    }

    /// Sets the constant of an unlinked data input pin.
    pub fn set_constant(&mut self, pin: PinId, value: Value) -> Result<(), GraphError> {
        let target = self.find_pin(pin).ok_or(GraphError::PinNotFound(pin))?;
        if target.kind() != PinKind::Input || target.is_flow() {
            return Err(GraphError::NoConstant(pin));
        }
        if self.is_pin_linked(pin) {
            return Err(GraphError::PinLinked(pin));
        }
        if let Some(target) = self.find_pin_mut(pin) {
            target.constant = value;
        }
        Ok(())
    }

    /// Drops every node and link. The id counter keeps running.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }

    /// Rewrites every pin's owner handle and kind from its position in the
    /// node list. Idempotent.
    pub fn rebuild_pin_owners(&mut self) {
        for index in 0..self.nodes.len() {
            self.rebuild_node(NodeHandle(index));
        }
    }

    fn rebuild_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get_mut(handle.0) else {
            return;
        };
        for input in &mut node.inputs {
            input.node = Some(handle);
            input.kind = PinKind::Input;
        }
        for output in &mut node.outputs {
            output.node = Some(handle);
            output.kind = PinKind::Output;
        }
    }
}
