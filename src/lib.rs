//! # blueprint-graph - Visual Scripting Graph Model and Program Format
//!
//! **blueprint-graph** holds the data model behind a node-based visual scripting
//! editor and the file format it saves to. A graph of typed nodes, pins and links
//! is flattened into a linear, index-addressed program that a runtime with no
//! notion of node ids can execute, and a saved program can be loaded back into a
//! live, editable graph.
//!
//! ## Core Workflow
//!
//! 1.  **Declare a Catalog**: Describe the available node prototypes with the
//!     [`catalog!`] macro or load them from JSON with [`Catalog::from_file`].
//!     Every prototype gets a global library index from its declaration order.
//! 2.  **Edit a Graph**: Create an [`Editor`]. It spawns one node per event
//!     prototype, then lets you add nodes, connect pins and edit constants.
//! 3.  **Save**: [`Editor::save`] linearizes the graph into a [`Program`] and
//!     writes it as JSON. Event nodes are the roots; control flow is written as
//!     command indices, data flow as output-pin slot numbers.
//! 4.  **Load**: [`Editor::load`] parses a program and rebuilds the graph,
//!     including fan-in links. A failed load leaves the current graph untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprint_graph::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = catalog! {
//!     (Event, "Event", "OnStart", [], []),
//!     (Function, "IO", "Print", [("msg", String)], []),
//! }?;
//!
//! let mut editor = Editor::new(catalog);
//! let start = editor.graph().nodes()[0].id;
//! let print = editor.spawn_node("IO", "Print", [200.0, 0.0])?;
//!
//! let graph = editor.graph();
//! let flow_out = graph.node(graph.find_node(start).unwrap()).unwrap().outputs()[0].id;
//! let print_node = graph.node(graph.find_node(print).unwrap()).unwrap();
//! let (flow_in, msg) = (print_node.inputs()[0].id, print_node.inputs()[1].id);
//!
//! editor.connect(flow_out, flow_in)?;
//! editor.set_constant(msg, "hello")?;
//!
//! let program = editor.to_program()?;
//! assert_eq!(program.commands.len(), 2);
//! assert_eq!(program.commands[0].next_nodes, vec![1]);
//! assert_eq!(program.commands[1].input_argument[0].value, "hello");
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```
//!
//! ## Program Format
//!
//! A saved program is a JSON document:
//!
//! ```json
//! {
//!     "version": 1,
//!     "name": "scene",
//!     "commands": [
//!         {
//!             "library_func_index": 0,
//!             "pos": [0.0, -300.0],
//!             "output_argument": [],
//!             "next_nodes": [1],
//!             "input_argument": []
//!         }
//!     ]
//! }
//! ```
//!
//! `next_nodes` holds one command index per flow output, with `4294967295`
//! standing for "no successor". Each `input_argument` carries either a constant
//! in its canonical text form (`value`) or the output-pin ids feeding it (`slots`).

pub mod editor;
pub mod error;
pub mod graph;
pub mod library;
pub mod prelude;
pub mod program;
pub mod types;

pub use editor::{Editor, EditorBuilder, Notification};
pub use library::Catalog;
pub use program::Program;
