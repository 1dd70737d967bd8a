//! Common test utilities: catalogs, pin lookups and graph comparison.
use blueprint_graph::prelude::*;

/// The two-prototype catalog from the save/load scenario.
///
/// `OnStart` is index 0, `IO: Print` is index 1.
#[allow(dead_code)]
pub fn scenario_catalog() -> Catalog {
    catalog! {
        (Event, "Event", "OnStart", [], []),
        (Function, "IO", "Print", [("msg", String)], []),
    }
    .expect("scenario catalog is valid")
}

/// A catalog covering every node kind.
///
/// | index | category | name     | kind     |
/// |-------|----------|----------|----------|
/// | 0     | Event    | OnStart  | event    |
/// | 1     | Event    | OnTick   | event    |
/// | 2     | IO       | Print    | function |
/// | 3     | IO       | Draw     | function |
/// | 4     | Flow     | Branch   | workflow |
/// | 5     | Math     | Add      | plain    |
/// | 6     | Math     | Greater  | plain    |
/// | 7     | Math     | MakeVec  | plain    |
#[allow(dead_code)]
pub fn rich_catalog() -> Catalog {
    catalog! {
        (Event, "Event", "OnStart", [], []),
        (Event, "Event", "OnTick", [], [("delta", Float)]),
        (Function, "IO", "Print", [("msg", String)], []),
        (Function, "IO", "Draw", [("texture", ResourceIndex), ("transform", Matrix4x4)], []),
        (Workflow, "Flow", "Branch", [("cond", Bool)], []),
        (Plain, "Math", "Add", [("a", Float), ("b", Float)], [("sum", Float)]),
        (Plain, "Math", "Greater", [("a", Float), ("b", Float)], [("result", Bool)]),
        (Plain, "Math", "MakeVec", [("x", Float), ("y", Float), ("z", Float)], [("v", Float3)]),
    }
    .expect("rich catalog is valid")
}

#[allow(dead_code)]
pub fn node<'g>(graph: &'g Graph, id: NodeId) -> &'g Node {
    let handle = graph.find_node(id).expect("node exists");
    graph.node(handle).expect("handle is valid")
}

#[allow(dead_code)]
pub fn flow_in(graph: &Graph, id: NodeId) -> PinId {
    node(graph, id).flow_inputs().next().expect("node has a flow input").id
}

#[allow(dead_code)]
pub fn flow_out(graph: &Graph, id: NodeId, index: usize) -> PinId {
    node(graph, id)
        .flow_outputs()
        .nth(index)
        .expect("flow output exists")
        .id
}

#[allow(dead_code)]
pub fn data_in(graph: &Graph, id: NodeId, index: usize) -> PinId {
    node(graph, id)
        .data_inputs()
        .nth(index)
        .expect("data input exists")
        .id
}

#[allow(dead_code)]
pub fn data_out(graph: &Graph, id: NodeId, index: usize) -> PinId {
    node(graph, id)
        .data_outputs()
        .nth(index)
        .expect("data output exists")
        .id
}

/// Id of the `n`th event node spawned by the editor.
#[allow(dead_code)]
pub fn event(editor: &Editor, n: usize) -> NodeId {
    editor
        .graph()
        .nodes()
        .iter()
        .filter(|node| node.kind() == NodeKind::Event)
        .nth(n)
        .expect("event node exists")
        .id
}

/// A command with pin-id slots replaced by `(command index, output position)`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCommand {
    pub library_func_index: u32,
    pub pos: Position,
    pub next_nodes: Vec<u32>,
    pub inputs: Vec<(ArgType, String, Vec<(usize, usize)>)>,
}

/// Rewrites a program so that two programs describing the same graph compare
/// equal whatever pin ids they were written with.
#[allow(dead_code)]
pub fn normalize(program: &Program) -> Vec<NormalizedCommand> {
    let slot_owner = |slot: u32| {
        program
            .commands
            .iter()
            .enumerate()
            .find_map(|(c, cmd)| {
                cmd.output_argument
                    .iter()
                    .position(|&s| s == slot)
                    .map(|o| (c, o))
            })
            .expect("slot is written by some command")
    };

    program
        .commands
        .iter()
        .map(|cmd| NormalizedCommand {
            library_func_index: cmd.library_func_index,
            pos: cmd.pos,
            next_nodes: cmd.next_nodes.clone(),
            inputs: cmd
                .input_argument
                .iter()
                .map(|arg| {
                    let mut slots: Vec<_> = arg.slots.iter().map(|&s| slot_owner(s)).collect();
                    slots.sort();
                    (arg.arg_type, arg.value.clone(), slots)
                })
                .collect(),
        })
        .collect()
}

/// Builds the scenario graph: `OnStart -> Print("hello")`.
#[allow(dead_code)]
pub fn scenario_editor() -> Editor {
    let mut editor = Editor::new(scenario_catalog());
    let start = event(&editor, 0);
    let print = editor
        .spawn_node("IO", "Print", [200.0, -300.0])
        .expect("Print is in the catalog");

    let graph = editor.graph();
    let (out, inp, msg) = (
        flow_out(graph, start, 0),
        flow_in(graph, print),
        data_in(graph, print, 0),
    );
    editor.connect(out, inp).expect("flow link is legal");
    editor.set_constant(msg, "hello").expect("msg is an unlinked input");
    editor
}
