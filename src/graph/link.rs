use super::color::Rgb;
use super::ids::{LinkId, PinId};

/// A directed edge from an output pin (`start`) to an input pin (`end`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub start: PinId,
    pub end: PinId,
    pub color: Rgb,
}

impl Link {
    pub fn touches(&self, pin: PinId) -> bool {
        self.start == pin || self.end == pin
    }
}
