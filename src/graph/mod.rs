//! The live, editable node graph.

pub mod color;
mod ids;
mod link;
mod model;
mod node;
mod pin;
mod position;

pub use color::{Rgb, node_color, pin_color};
pub use ids::{LinkId, NodeHandle, NodeId, PinId};
pub use link::Link;
pub use model::Graph;
pub use node::Node;
pub use pin::{Pin, PinKind};
pub use position::{CanvasPositions, Position, PositionStore};
