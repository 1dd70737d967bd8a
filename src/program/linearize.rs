use super::format::{Command, InputArgument, NO_SUCCESSOR, Program, SUPPORTED_VERSION};
use crate::error::{GraphError, ProgramError};
use crate::graph::{Graph, Node, NodeHandle, Pin, PositionStore};
use crate::library::NodeKind;
use tracing::{debug, warn};

/// Flattens `graph` into a program named `name`.
///
/// Event nodes are the roots and take command indices `0..k` in collection
/// order. Every other node gets the next free index when it is first reached
/// through a flow link; a node reached again is referenced by the index it
/// already has, so cycles terminate. Nodes no flow path reaches are placed
/// afterwards, each as a root of its own, in collection order.
pub fn linearize<P: PositionStore + ?Sized>(
    graph: &Graph,
    positions: &P,
    name: &str,
) -> Result<Program, ProgramError> {
    Linearizer::new(graph, positions).run(name)
}

struct Linearizer<'a, P: ?Sized> {
    graph: &'a Graph,
    positions: &'a P,
    command_index: Vec<Option<u32>>,
    commands: Vec<Option<Command>>,
    stack: Vec<NodeHandle>,
    next_index: u32,
}

impl<'a, P: PositionStore + ?Sized> Linearizer<'a, P> {
    fn new(graph: &'a Graph, positions: &'a P) -> Self {
        let count = graph.nodes().len();
        Self {
            graph,
            positions,
            command_index: vec![None; count],
            commands: vec![None; count],
            stack: Vec::new(),
            next_index: 0,
        }
    }

    fn run(mut self, name: &str) -> Result<Program, ProgramError> {
        let graph = self.graph;

        let roots: Vec<NodeHandle> = graph
            .handles()
            .filter(|h| graph.node(*h).is_some_and(|n| n.kind() == NodeKind::Event))
            .collect();
        for &root in &roots {
            self.place(root);
        }
        // LIFO: reversed so roots pop in encounter order.
        self.stack.extend(roots.into_iter().rev());
        self.drain()?;

        for handle in graph.handles() {
            if self.command_index[handle.index()].is_none() {
                self.place(handle);
                self.stack.push(handle);
                self.drain()?;
            }
        }

        for (handle, node) in graph.handles().zip(graph.nodes()) {
            let index = self.command_index[handle.index()].ok_or(ProgramError::Unplaced(node.id))?;
            if let Some(command) = self.commands[index as usize].as_mut() {
                command.input_argument = input_arguments(graph, node);
            }
        }

        let commands = self
            .commands
            .into_iter()
            .zip(graph.nodes())
            .map(|(command, node)| command.ok_or(ProgramError::Unplaced(node.id)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            nodes = graph.nodes().len(),
            links = graph.links().len(),
            commands = commands.len(),
            "linearized graph"
        );

        Ok(Program {
            version: SUPPORTED_VERSION,
            name: name.to_string(),
            commands,
        })
    }

    fn place(&mut self, handle: NodeHandle) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        self.command_index[handle.index()] = Some(index);
        index
    }

    fn drain(&mut self) -> Result<(), ProgramError> {
        let graph = self.graph;
        while let Some(handle) = self.stack.pop() {
            let Some(node) = graph.node(handle) else {
                continue;
            };
            let index = self.command_index[handle.index()].ok_or(ProgramError::Unplaced(node.id))?;

            let next_nodes = self.successors(node)?;
            self.commands[index as usize] = Some(Command {
                library_func_index: node.library_index(),
                pos: self.positions.position(node.id).unwrap_or_default(),
                output_argument: node.data_outputs().map(|p| p.id.get()).collect(),
                next_nodes,
                input_argument: Vec::new(),
            });
        }
        Ok(())
    }

    /// One entry per flow output; unconnected outputs hold `NO_SUCCESSOR`
    /// and trailing ones are dropped.
    fn successors(&mut self, node: &Node) -> Result<Vec<u32>, ProgramError> {
        let graph = self.graph;
        let mut next = Vec::new();

        for pin in node.flow_outputs() {
            let mut links = graph.links_from(pin.id);
            let Some(link) = links.next() else {
                next.push(NO_SUCCESSOR);
                continue;
            };
            if links.next().is_some() {
                warn!(node = %node.id, pin = %pin.id, "flow output has several links; following the first");
            }

            let target = graph
                .find_pin(link.end)
                .and_then(Pin::node)
                .ok_or(GraphError::PinNotFound(link.end))?;
            let index = match self.command_index[target.index()] {
                Some(index) => index,
                None => {
                    let index = self.place(target);
                    self.stack.push(target);
                    index
                }
            };
            next.push(index);
        }

        while next.last() == Some(&NO_SUCCESSOR) {
            next.pop();
        }
        if next.is_empty() {
            next.push(NO_SUCCESSOR);
        }
        Ok(next)
    }
}

fn input_arguments(graph: &Graph, node: &Node) -> Vec<InputArgument> {
    node.data_inputs()
        .map(|pin| {
            let slots: Vec<u32> = graph.links_into(pin.id).map(|l| l.start.get()).collect();
            let value = if slots.is_empty() {
                pin.constant.canonical()
            } else {
                String::new()
            };
            InputArgument {
                arg_type: pin.arg_type(),
                value,
                slots,
            }
        })
        .collect()
}
