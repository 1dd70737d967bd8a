use std::fmt;

macro_rules! define_ids {
    ( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub u32);

            impl $name {
                pub fn get(self) -> u32 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<u32> for $name {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }
        )*
    };
}

define_ids! {
    /// Process-unique identity of a node.
    NodeId,
    /// Process-unique identity of a pin. Data output pin ids double as the
    /// slot numbers written into programs.
    PinId,
    /// Process-unique identity of a link.
    LinkId,
}

/// Position of a node inside the graph's node list.
///
/// Handles are invalidated by node removal; the graph rewrites every pin's
/// owner handle whenever the list changes shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}
