//! An editing session: the live graph, its canvas positions and the catalog it
//! was built from, plus the save/load actions the canvas triggers.

use crate::error::{CatalogError, GraphError, ProgramError};
use crate::graph::{CanvasPositions, Graph, LinkId, NodeId, PinId, Position, PositionStore};
use crate::library::{Catalog, NodeKind, NodePrototype};
use crate::program::{Program, linearize, reconstruct};
use crate::types::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// A message the UI shows as a modal popup. Drained with [`Editor::take_notifications`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    FileError { path: String, message: String },
    VersionError { found: u32, supported: u32 },
    MalformedFile { path: String, message: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::FileError { path, message } => {
                write!(f, "File error: could not access '{}': {}", path, message)
            }
            Notification::VersionError { found, supported } => write!(
                f,
                "Version error: file has version {}, this editor reads version {}",
                found, supported
            ),
            Notification::MalformedFile { path, message } => {
                write!(f, "Malformed file '{}': {}", path, message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct EditorConfig {
    program_name: String,
    event_origin: Position,
    event_spacing: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            program_name: "scene".to_string(),
            event_origin: [0.0, -300.0],
            event_spacing: 100.0,
        }
    }
}

pub struct EditorBuilder {
    catalog: Catalog,
    config: EditorConfig,
}

impl EditorBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            config: EditorConfig::default(),
        }
    }

    /// Name written into saved programs.
    pub fn with_program_name(mut self, name: &str) -> Self {
        self.config.program_name = name.to_string();
        self
    }

    /// Where the event column starts and how far apart event nodes sit.
    pub fn with_event_layout(mut self, origin: Position, spacing: f32) -> Self {
        self.config.event_origin = origin;
        self.config.event_spacing = spacing;
        self
    }

    pub fn build(self) -> Editor {
        let mut editor = Editor {
            catalog: self.catalog,
            graph: Graph::new(),
            positions: CanvasPositions::new(),
            notifications: Vec::new(),
            config: self.config,
        };
        editor.spawn_events();
        editor
    }
}

pub struct Editor {
    catalog: Catalog,
    graph: Graph,
    positions: CanvasPositions,
    notifications: Vec<Notification>,
    config: EditorConfig,
}

impl Editor {
    pub fn builder(catalog: Catalog) -> EditorBuilder {
        EditorBuilder::new(catalog)
    }

    pub fn new(catalog: Catalog) -> Self {
        EditorBuilder::new(catalog).build()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn positions(&self) -> &CanvasPositions {
        &self.positions
    }

    /// The canvas moves nodes through this.
    pub fn positions_mut(&mut self) -> &mut CanvasPositions {
        &mut self.positions
    }

    pub fn program_name(&self) -> &str {
        &self.config.program_name
    }

    /// Prototypes offered by the "create node" browser; events are excluded.
    pub fn browsable(&self) -> impl Iterator<Item = (&str, &[Arc<NodePrototype>])> {
        self.catalog.browsable()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Drops everything and starts over with one node per event prototype.
    pub fn reset(&mut self) {
        self.graph = Graph::new();
        self.positions.clear();
        self.spawn_events();
    }

    fn spawn_events(&mut self) {
        let [x, y] = self.config.event_origin;
        let events: Vec<Arc<NodePrototype>> = self.catalog.events().to_vec();
        for (i, prototype) in events.iter().enumerate() {
            let position = [x, y + self.config.event_spacing * i as f32];
            self.spawn_prototype(prototype, position);
        }
    }

    pub fn spawn_prototype(&mut self, prototype: &Arc<NodePrototype>, position: Position) -> NodeId {
        let id = NodeId(self.graph.next_id());
        self.graph.spawn_node_from_library(prototype, id);
        self.positions.set_position(id, position);
        id
    }

    pub fn spawn_node(
        &mut self,
        category: &str,
        name: &str,
        position: Position,
    ) -> Result<NodeId, CatalogError> {
        let prototype = Arc::clone(self.catalog.lookup(category, name)?);
        Ok(self.spawn_prototype(&prototype, position))
    }

    /// Spawns a node while a link is being dragged out of `dragged`, and
    /// connects the dragged pin to the first compatible pin of the new node.
    pub fn spawn_node_from_pin(
        &mut self,
        prototype: &Arc<NodePrototype>,
        position: Position,
        dragged: PinId,
    ) -> Result<(NodeId, Option<LinkId>), GraphError> {
        if self.graph.find_pin(dragged).is_none() {
            return Err(GraphError::PinNotFound(dragged));
        }
        let id = self.spawn_prototype(prototype, position);
        let target = self
            .graph
            .find_node(id)
            .and_then(|h| self.graph.node(h))
            .and_then(|node| {
                node.pins()
                    .map(|p| p.id)
                    .find(|&pin| self.graph.can_create_link(dragged, pin))
            });
        let link = match target {
            Some(pin) => Some(self.graph.create_link(dragged, pin)?),
            None => None,
        };
        Ok((id, link))
    }

    /// Deletes a node and its links. Event nodes are kept; the call returns
    /// `Ok(false)` for them.
    pub fn delete_node(&mut self, id: NodeId) -> Result<bool, GraphError> {
        let handle = self.graph.find_node(id).ok_or(GraphError::NodeNotFound(id))?;
        if self.graph.node(handle).is_some_and(|n| n.kind() == NodeKind::Event) {
            return Ok(false);
        }
        self.graph.remove_node(id)?;
        self.positions.remove(id);
        Ok(true)
    }

    pub fn connect(&mut self, a: PinId, b: PinId) -> Result<LinkId, GraphError> {
        self.graph.create_link(a, b)
    }

    pub fn delete_link(&mut self, id: LinkId) -> Result<(), GraphError> {
        self.graph.remove_link(id).map(|_| ())
    }

    pub fn set_constant(&mut self, pin: PinId, value: impl Into<Value>) -> Result<(), GraphError> {
        self.graph.set_constant(pin, value.into())
    }

    pub fn to_program(&self) -> Result<Program, ProgramError> {
        linearize(&self.graph, &self.positions, &self.config.program_name)
    }

    /// Writes the current graph to `path`. Failures are returned and also
    /// queued as a notification.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), ProgramError> {
        let path = path.as_ref();
        let result = self.to_program().and_then(|program| program.save(path));
        match &result {
            Ok(()) => info!(path = %path.display(), nodes = self.graph.nodes().len(), "saved program"),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to save program");
                self.notify(path, e);
            }
        }
        result
    }

    /// Replaces the graph with the program stored at `path`. On any failure
    /// the current graph is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ProgramError> {
        let path = path.as_ref();
        let result = Program::from_file(path).and_then(|program| self.apply_program(&program));
        match &result {
            Ok(()) => info!(path = %path.display(), nodes = self.graph.nodes().len(), "loaded program"),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load program");
                self.notify(path, e);
            }
        }
        result
    }

    /// Rebuilds the graph from an in-memory program, swapping it in only if
    /// reconstruction succeeds.
    pub fn apply_program(&mut self, program: &Program) -> Result<(), ProgramError> {
        let mut positions = CanvasPositions::new();
        let graph = reconstruct(&self.catalog, program, &mut positions)?;
        self.graph = graph;
        self.positions = positions;
        Ok(())
    }

    fn notify(&mut self, path: &Path, err: &ProgramError) {
        let path = path.display().to_string();
        let notification = match err {
            ProgramError::Io { path, message } => Notification::FileError {
                path: path.clone(),
                message: message.clone(),
            },
            ProgramError::UnsupportedVersion { found, supported } => Notification::VersionError {
                found: *found,
                supported: *supported,
            },
            other => Notification::MalformedFile {
                path,
                message: other.to_string(),
            },
        };
        self.notifications.push(notification);
    }
}
