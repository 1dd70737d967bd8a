use blueprint_graph::prelude::*;
use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Inspect and rewrite visual scripting programs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every prototype of a catalog with its global library index
    Catalog {
        /// Path to the catalog declaration JSON file
        catalog_path: String,
    },
    /// Load a program into a graph and print its listing
    Inspect {
        /// Path to the catalog declaration JSON file
        catalog_path: String,
        /// Path to the program JSON file
        program_path: String,
    },
    /// Load a program and write it back out through the linearizer
    Resave {
        /// Path to the catalog declaration JSON file
        catalog_path: String,
        /// Path to the program JSON file to read
        input_path: String,
        /// Where to write the rewritten program
        output_path: String,
        /// Program name to write; defaults to the input's name
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog { catalog_path } => run_catalog(&catalog_path),
        Commands::Inspect {
            catalog_path,
            program_path,
        } => run_inspect(&catalog_path, &program_path),
        Commands::Resave {
            catalog_path,
            input_path,
            output_path,
            name,
        } => run_resave(&catalog_path, &input_path, &output_path, name),
    }
}

fn load_catalog(path: &str) -> Catalog {
    Catalog::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

fn run_catalog(catalog_path: &str) {
    let catalog = load_catalog(catalog_path);

    println!("======== CATALOG: {} prototypes ========", catalog.len());
    let mut index = 0;
    for (category, prototypes) in catalog.categories() {
        println!("\n--- {} ---", category);
        for prototype in prototypes {
            let inputs = prototype
                .inputs
                .iter()
                .map(|a| format!("{}: {}", a.name, a.arg_type))
                .collect::<Vec<_>>()
                .join(", ");
            let outputs = prototype
                .outputs
                .iter()
                .map(|a| format!("{}: {}", a.name, a.arg_type))
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{:04}: {:<24} {:<9} ({}) -> ({})",
                index, prototype.name, prototype.kind, inputs, outputs
            );
            index += 1;
        }
    }
}

fn run_inspect(catalog_path: &str, program_path: &str) {
    let catalog = load_catalog(catalog_path);
    let start = Instant::now();

    let program = Program::from_file(program_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read program: {}", e)));
    let mut positions = CanvasPositions::new();
    let graph = reconstruct(&catalog, &program, &mut positions)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to rebuild graph: {}", e)));
    let duration = start.elapsed();

    println!("{}", Listing::new(&program).with_catalog(&catalog));

    let fan_in = graph
        .nodes()
        .iter()
        .flat_map(|n| n.data_inputs())
        .filter(|p| graph.links_into(p.id).count() > 1)
        .count();

    println!("--- Graph Summary ---");
    println!("Nodes:            {}", graph.nodes().len());
    println!("Links:            {}", graph.links().len());
    println!("Fan-in inputs:    {}", fan_in);
    println!("Placed nodes:     {}", positions.len());
    println!("Load time:        {:?}", duration);
}

fn run_resave(catalog_path: &str, input_path: &str, output_path: &str, name: Option<String>) {
    let catalog = load_catalog(catalog_path);

    let program = Program::from_file(input_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read program: {}", e)));
    let name = name.unwrap_or_else(|| program.name.clone());

    let mut editor = Editor::builder(catalog).with_program_name(&name).build();
    editor
        .apply_program(&program)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to rebuild graph: {}", e)));
    editor
        .save(output_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write program: {}", e)));

    println!(
        "Rewrote {} commands from '{}' to '{}'.",
        editor.graph().nodes().len(),
        input_path,
        output_path
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
