use super::format::{NO_SUCCESSOR, Program};
use crate::error::ProgramError;
use crate::graph::{Graph, NodeHandle, NodeId, PinId, PositionStore};
use crate::library::Catalog;
use crate::types::Value;
use ahash::AHashMap;
use tracing::{debug, warn};

/// Rebuilds a live graph from `program`.
///
/// The graph is built from scratch; the caller decides whether to swap it in.
/// Node positions are written to `positions` as nodes are created, so callers
/// that need all-or-nothing behaviour should pass an empty store as well.
pub fn reconstruct<P: PositionStore + ?Sized>(
    catalog: &Catalog,
    program: &Program,
    positions: &mut P,
) -> Result<Graph, ProgramError> {
    program.check_version()?;

    let mut graph = Graph::new();
    let mut command_nodes: Vec<NodeHandle> = Vec::with_capacity(program.commands.len());
    // Written slot number -> live output pin.
    let mut output_slots: AHashMap<u32, PinId> = AHashMap::new();

    for (position, command) in program.commands.iter().enumerate() {
        let prototype = catalog.resolve(command.library_func_index).ok_or(
            ProgramError::UnknownLibraryIndex {
                command: position,
                index: command.library_func_index,
            },
        )?;

        let id = NodeId(graph.next_id());
        let handle = graph.spawn_node_from_library(prototype, id);
        command_nodes.push(handle);
        positions.set_position(id, command.pos);

        let Some(node) = graph.node(handle) else {
            continue;
        };
        let outputs: Vec<PinId> = node.data_outputs().map(|p| p.id).collect();
        if outputs.len() != command.output_argument.len() {
            return Err(ProgramError::ArgumentCountMismatch {
                command: position,
                what: "output arguments",
                expected: outputs.len(),
                found: command.output_argument.len(),
            });
        }
        for (&slot, pin) in command.output_argument.iter().zip(outputs) {
            if output_slots.insert(slot, pin).is_some() {
                warn!(command = position, slot, "slot written by more than one command");
            }
        }
    }

    for (position, command) in program.commands.iter().enumerate() {
        let Some(node) = graph.node(command_nodes[position]) else {
            continue;
        };
        let flow_outputs: Vec<PinId> = node.flow_outputs().map(|p| p.id).collect();
        let data_inputs: Vec<(PinId, _)> = node.data_inputs().map(|p| (p.id, p.arg_type())).collect();

        let successors = command.next_nodes.len();
        if successors > flow_outputs.len() && !command.is_terminal() {
            return Err(ProgramError::ArgumentCountMismatch {
                command: position,
                what: "successors",
                expected: flow_outputs.len(),
                found: successors,
            });
        }
        for (&target, &start) in command.next_nodes.iter().zip(&flow_outputs) {
            if target == NO_SUCCESSOR {
                continue;
            }
            let end = command_nodes
                .get(target as usize)
                .and_then(|h| graph.node(*h))
                .and_then(|n| n.flow_inputs().next())
                .map(|p| p.id)
                .ok_or(ProgramError::InvalidSuccessor {
                    command: position,
                    target,
                })?;
            graph.create_link(start, end)?;
        }

        if data_inputs.len() != command.input_argument.len() {
            return Err(ProgramError::ArgumentCountMismatch {
                command: position,
                what: "input arguments",
                expected: data_inputs.len(),
                found: command.input_argument.len(),
            });
        }
        for (argument, (pin, arg_type)) in command.input_argument.iter().zip(data_inputs) {
            if argument.arg_type != arg_type {
                warn!(
                    command = position,
                    pin = %pin,
                    written = %argument.arg_type,
                    declared = %arg_type,
                    "input argument type differs from the catalog"
                );
            }
            if argument.slots.is_empty() {
                graph.set_constant(pin, Value::parse(&argument.value))?;
                continue;
            }
            for &slot in &argument.slots {
                let start = *output_slots.get(&slot).ok_or(ProgramError::DanglingSlot {
                    command: position,
                    slot,
                })?;
                graph.create_link(start, pin)?;
            }
        }
    }

    graph.rebuild_pin_owners();
    debug!(
        commands = program.commands.len(),
        nodes = graph.nodes().len(),
        links = graph.links().len(),
        "reconstructed graph"
    );
    Ok(graph)
}
