use crate::graph::{LinkId, NodeId, PinId};
use crate::types::ArgType;
use thiserror::Error;

/// Errors raised when reading a constant value through the checked accessor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Cannot read a {requested} from a value holding {held}")]
    NotPopulated {
        requested: &'static str,
        held: ArgType,
    },
}

/// Errors that can occur while building or querying the node catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error(
        "Node '{category}: {name}' declares {names} {side} names but {types} {side} types"
    )]
    ArityMismatch {
        category: String,
        name: String,
        side: &'static str,
        names: usize,
        types: usize,
    },

    #[error(
        "Category '{0}' is declared in more than one run; entries of a category must be contiguous"
    )]
    ScatteredCategory(String),

    #[error("No node '{name}' in category '{category}'")]
    UnknownPrototype { category: String, name: String },
}

/// Errors raised by graph mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("Pin {0} does not exist")]
    PinNotFound(PinId),

    #[error("Link {0} does not exist")]
    LinkNotFound(LinkId),

    #[error("Pins {start} and {end} cannot be linked")]
    LinkRejected { start: PinId, end: PinId },

    #[error("Pin {0} is not a data input and holds no constant")]
    NoConstant(PinId),

    #[error("Pin {0} is linked; its constant is not editable")]
    PinLinked(PinId),
}

/// Errors that can occur while saving or loading a program document.
#[derive(Error, Debug, Clone)]
pub enum ProgramError {
    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse program JSON: {0}")]
    JsonParseError(String),

    #[error("Unsupported program version {found}; this editor reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Command {command} refers to library index {index}, which is not in the catalog")]
    UnknownLibraryIndex { command: usize, index: u32 },

    #[error("Command {command} lists {found} {what}, but its node has {expected}")]
    ArgumentCountMismatch {
        command: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "Command {command} names successor {target}, which is not a command with a flow input"
    )]
    InvalidSuccessor { command: usize, target: u32 },

    #[error("Command {command} reads slot {slot}, which no command outputs")]
    DanglingSlot { command: usize, slot: u32 },

    #[error("Node {0} was never assigned a command index")]
    Unplaced(NodeId),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
