//!
//! This module is the entry point for all CLI commands and exposes the
//! registry through read-only queries: list names, show one contract's
//! collections, dump the domain model as JSON.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::model::{Contract, Function, Parameter, Variable};
use crate::registry::{build_registry, ContractRegistry};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "solscope",
    version,
    about = "A structured, queryable explorer for compiler-emitted Solidity contract ASTs."
)]
pub struct SolscopeArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// List every contract found in a folder of AST documents.
    List {
        /// The folder containing compiler output documents.
        #[arg(required = true)]
        folder: PathBuf,
    },
    /// Show a contract's full declaration breakdown.
    Show {
        /// The folder containing compiler output documents.
        folder: PathBuf,
        /// The contract name to show.
        name: String,
    },
    /// Print a contract's domain model as pretty JSON.
    Json {
        /// The folder containing compiler output documents.
        folder: PathBuf,
        /// The contract name to dump.
        name: String,
    },
}

// ============================================================================
// MAIN ENTRY POINT - Direct registry calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = SolscopeArgs::parse();

    match args.command {
        ArgsCommand::List { folder } => {
            let registry = build_registry_or_exit(&folder);
            for name in registry.names() {
                println!("{name}");
            }
        }

        ArgsCommand::Show { folder, name } => {
            let registry = build_registry_or_exit(&folder);
            let contract = fetch_or_exit(&registry, &name);
            if let Err(e) = print_contract(contract) {
                eprintln!("Failed to write contract listing: {e}");
                process::exit(1);
            }
        }

        ArgsCommand::Json { folder, name } => {
            let registry = build_registry_or_exit(&folder);
            let contract = fetch_or_exit(&registry, &name);
            let json = serde_json::to_string_pretty(contract).unwrap_or_else(|e| {
                eprintln!("Failed to serialize contract: {e}");
                process::exit(1);
            });
            println!("{json}");
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS - Common patterns extracted
// ============================================================================

fn build_registry_or_exit(folder: &Path) -> ContractRegistry {
    build_registry(folder).unwrap_or_else(|e| {
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        process::exit(1);
    })
}

fn fetch_or_exit<'a>(registry: &'a ContractRegistry, name: &str) -> &'a Contract {
    registry.get(name).unwrap_or_else(|| {
        eprintln!("No contract named '{name}' in this folder.");
        process::exit(1);
    })
}

// ============================================================================
// OUTPUT FUNCTIONS - Contract pretty-printing
// ============================================================================

fn print_contract(contract: &Contract) -> io::Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);

    heading(&mut out, "Contract")?;
    writeln!(out, "  {}", contract.name)?;
    if !contract.pragma.is_empty() {
        writeln!(out, "  {}", contract.pragma)?;
    }

    if !contract.imports.is_empty() {
        heading(&mut out, "Imports")?;
        for import in &contract.imports {
            let shown = if import.file.is_empty() {
                &import.absolute_path
            } else {
                &import.file
            };
            if import.alias.is_empty() {
                writeln!(out, "  {shown}")?;
            } else {
                writeln!(out, "  {} as {}", shown, import.alias)?;
            }
        }
    }

    if !contract.inherits.is_empty() {
        heading(&mut out, "Inherits")?;
        writeln!(out, "  {}", contract.inherits.join(", "))?;
    }

    if let Some(constructor) = &contract.constructor {
        heading(&mut out, "Constructor")?;
        writeln!(out, "  constructor({})", parameter_list(&constructor.parameters))?;
    }

    if !contract.variables.is_empty() {
        heading(&mut out, "Variables")?;
        for variable in &contract.variables {
            print_variable(&mut out, variable)?;
        }
    }

    if !contract.mappings.is_empty() {
        heading(&mut out, "Mappings")?;
        for mapping in &contract.mappings {
            print_variable(&mut out, mapping)?;
        }
    }

    if !contract.functions.is_empty() {
        heading(&mut out, "Functions")?;
        for function in &contract.functions {
            print_function(&mut out, function)?;
        }
    }

    if !contract.events.is_empty() {
        heading(&mut out, "Events")?;
        for event in &contract.events {
            writeln!(out, "  {}({})", event.name, parameter_list(&event.parameters))?;
        }
    }

    if !contract.modifiers.is_empty() {
        heading(&mut out, "Modifiers")?;
        for modifier in &contract.modifiers {
            writeln!(out, "  {}({})", modifier.name, parameter_list(&modifier.parameters))?;
        }
    }

    if !contract.structs.is_empty() {
        heading(&mut out, "Structs")?;
        for definition in &contract.structs {
            writeln!(out, "  {}", definition.name)?;
            for member in &definition.members {
                writeln!(out, "    {} {}", member.ty, member.name)?;
            }
        }
    }

    if !contract.enums.is_empty() {
        heading(&mut out, "Enums")?;
        for definition in &contract.enums {
            writeln!(out, "  {} {{ {} }}", definition.name, definition.values.join(", "))?;
        }
    }

    out.reset()
}

fn heading(out: &mut StandardStream, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    writeln!(out, "{title}")?;
    out.reset()
}

fn print_variable(out: &mut StandardStream, variable: &Variable) -> io::Result<()> {
    let mut line = format!("  {} {}", variable.ty, variable.name);
    if !variable.visibility.is_empty() {
        line.push_str(&format!(" [{}]", variable.visibility));
    }
    if variable.constant {
        line.push_str(" constant");
    }
    if !variable.mutability.is_empty() && variable.mutability != "mutable" {
        line.push_str(&format!(" {}", variable.mutability));
    }
    if !variable.value.is_empty() {
        line.push_str(&format!(" = {}", variable.value));
    }
    writeln!(out, "{line}")
}

fn print_function(out: &mut StandardStream, function: &Function) -> io::Result<()> {
    let name = if function.name.is_empty() {
        &function.kind
    } else {
        &function.name
    };
    let mut line = format!("  {}({})", name, parameter_list(&function.parameters));
    if !function.visibility.is_empty() {
        line.push_str(&format!(" {}", function.visibility));
    }
    if !function.state_mutability.is_empty() {
        line.push_str(&format!(" {}", function.state_mutability));
    }
    for modifier in &function.modifiers {
        line.push_str(&format!(" {modifier}"));
    }
    if !function.overrides.is_empty() {
        line.push_str(&format!(" override({})", function.overrides.join(", ")));
    }
    if !function.return_parameters.is_empty() {
        line.push_str(&format!(
            " returns ({})",
            parameter_list(&function.return_parameters)
        ));
    }
    writeln!(out, "{line}")
}

fn parameter_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| {
            let mut text = parameter.ty.clone();
            if parameter.indexed {
                text.push_str(" indexed");
            }
            if !parameter.name.is_empty() {
                text.push_str(&format!(" {}", parameter.name));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}
