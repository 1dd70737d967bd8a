//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to declare a catalog, edit a graph
//! and save or load programs.
//!
//! # Example
//!
//! ```rust,no_run
//! use blueprint_graph::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let mut editor = Editor::new(catalog);
//! editor.load("path/to/scene.json")?;
//! println!("{}", Listing::new(&editor.to_program()?).with_catalog(editor.catalog()));
//! # Ok(())
//! # }
//! ```

// Editing session
pub use crate::editor::{Editor, EditorBuilder, Notification};

// Node library
pub use crate::catalog;
pub use crate::library::{Catalog, CatalogBuilder, NodeKind, NodePrototype};

// Graph model
pub use crate::graph::{
    CanvasPositions, Graph, Link, LinkId, Node, NodeId, Pin, PinId, PinKind, Position,
    PositionStore,
};

// Program format
pub use crate::program::{
    Command, InputArgument, Listing, NO_SUCCESSOR, Program, SUPPORTED_VERSION, linearize,
    reconstruct,
};

// Values
pub use crate::types::{ArgType, Float2, Float3, Float4, Matrix4x4, ResourceIndex, Value};

// Error types
pub use crate::error::{CatalogError, GraphError, ProgramError, ValueError};
