use super::ids::NodeId;
use ahash::AHashMap;

/// Canvas coordinates of a node, passed through without interpretation.
pub type Position = [f32; 2];

/// Where node canvas positions live. The canvas layer usually owns this; the
/// program writer and reader only read and write through it.
pub trait PositionStore {
    fn position(&self, node: NodeId) -> Option<Position>;
    fn set_position(&mut self, node: NodeId, position: Position);
    fn clear(&mut self);
}

/// In-memory position store.
#[derive(Debug, Clone, Default)]
pub struct CanvasPositions {
    positions: AHashMap<NodeId, Position>,
}

impl CanvasPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn remove(&mut self, node: NodeId) -> Option<Position> {
        self.positions.remove(&node)
    }
}

impl PositionStore for CanvasPositions {
    fn position(&self, node: NodeId) -> Option<Position> {
        self.positions.get(&node).copied()
    }

    fn set_position(&mut self, node: NodeId, position: Position) {
        self.positions.insert(node, position);
    }

    fn clear(&mut self) {
        self.positions.clear();
    }
}
