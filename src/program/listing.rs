use super::format::{Command, NO_SUCCESSOR, Program};
use crate::library::Catalog;
use itertools::Itertools;
use std::fmt;

/// Human-readable listing of a program, one block per command.
///
/// With a catalog attached, commands are labelled with their prototype's
/// display name instead of the bare library index.
pub struct Listing<'a> {
    program: &'a Program,
    catalog: Option<&'a Catalog>,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    fn label(&self, command: &Command) -> String {
        self.catalog
            .and_then(|c| c.resolve(command.library_func_index))
            .map(|p| p.display_name())
            .unwrap_or_else(|| format!("#{}", command.library_func_index))
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "======== PROGRAM: {} (version {}, {} commands) ========",
            self.program.name,
            self.program.version,
            self.program.commands.len()
        )?;

        for (index, command) in self.program.commands.iter().enumerate() {
            let [x, y] = command.pos;
            writeln!(f, "\n{:04}: {:<28} @ ({}, {})", index, self.label(command), x, y)?;

            if !command.output_argument.is_empty() {
                writeln!(f, "      {:<8} [{}]", "out", command.output_argument.iter().join(", "))?;
            }
            for (slot, argument) in command.input_argument.iter().enumerate() {
                let source = if argument.slots.is_empty() {
                    format!("= {:?}", argument.value)
                } else {
                    format!("<- [{}]", argument.slots.iter().join(", "))
                };
                writeln!(f, "      in[{}]    {:<8} {}", slot, argument.arg_type, source)?;
            }
            if command.is_terminal() {
                writeln!(f, "      {:<8} END", "next")?;
            } else {
                let next = command
                    .next_nodes
                    .iter()
                    .map(|&n| match n {
                        NO_SUCCESSOR => "----".to_string(),
                        n => format!("{:04}", n),
                    })
                    .join(", ");
                writeln!(f, "      {:<8} -> {}", "next", next)?;
            }
        }

        writeln!(f, "\n================ END OF PROGRAM ================")
    }
}
