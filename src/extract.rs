//! Extraction engine: one pass over a document's node tree, building the
//! domain model.
//!
//! Extraction is a pure transform with a single failure mode: a document
//! with no top-level nodes. Everything else degrades instead of failing:
//! unknown node kinds are skipped and unrenderable leaf expressions become
//! empty strings.

use std::path::Path;

use crate::ast::{
    AstNode, ContractNode, EnumNode, EventNode, FunctionNode, ModifierNode, SourceDocument,
    StructNode, TypeNode, VariableNode,
};
use crate::errors::ExplorerError;
use crate::model::{Contract, Enum, Event, Function, Import, Modifier, Parameter, Struct, Variable};
use crate::types::render_type;
use crate::values::render_value;

/// Builds a [`Contract`] from one decoded document.
///
/// The path is only used to report the missing-AST case; extraction itself
/// performs no I/O.
pub fn extract(doc: &SourceDocument, path: &Path) -> Result<Contract, ExplorerError> {
    if doc.ast.nodes.is_empty() {
        return Err(ExplorerError::MissingAst {
            path: path.to_path_buf(),
        });
    }

    let mut contract = Contract {
        name: doc.contract_name.clone(),
        ..Contract::default()
    };

    // Only the first contract definition in a document contributes members.
    let mut seen_definition = false;

    for node in &doc.ast.nodes {
        match node {
            AstNode::PragmaDirective(pragma) => {
                contract.pragma = format!("pragma {};", pragma.literals.concat());
            }
            AstNode::ImportDirective(import) => {
                contract.imports.push(Import {
                    absolute_path: import.absolute_path.clone(),
                    file: import.file.clone(),
                    alias: import.name.clone(),
                });
            }
            AstNode::ContractDefinition(definition) => {
                if seen_definition {
                    continue;
                }
                seen_definition = true;
                if contract.name.is_empty() {
                    contract.name = definition.name.clone();
                }
                extract_definition(definition, &mut contract);
            }
            // Member kinds cannot appear at the top level; anything else is
            // an unrecognized kind. Both skip.
            AstNode::VariableDeclaration(_)
            | AstNode::FunctionDefinition(_)
            | AstNode::EventDefinition(_)
            | AstNode::ModifierDefinition(_)
            | AstNode::StructDefinition(_)
            | AstNode::EnumDefinition(_)
            | AstNode::Other => {}
        }
    }

    Ok(contract)
}

fn extract_definition(definition: &ContractNode, contract: &mut Contract) {
    for base in &definition.base_contracts {
        contract.inherits.push(base.base_name.name.clone());
    }

    for member in &definition.nodes {
        match member {
            AstNode::VariableDeclaration(declaration) => {
                let variable = extract_variable(declaration);
                if matches!(declaration.type_name, Some(TypeNode::Mapping(_))) {
                    contract.mappings.push(variable);
                } else {
                    contract.variables.push(variable);
                }
            }
            AstNode::FunctionDefinition(function) => {
                let function = extract_function(function);
                if function.kind == "constructor" {
                    // Last constructor wins; no merge.
                    contract.constructor = Some(function);
                } else {
                    contract.functions.push(function);
                }
            }
            AstNode::EventDefinition(event) => contract.events.push(extract_event(event)),
            AstNode::ModifierDefinition(modifier) => {
                contract.modifiers.push(extract_modifier(modifier));
            }
            AstNode::StructDefinition(structure) => {
                contract.structs.push(extract_struct(structure));
            }
            AstNode::EnumDefinition(enumeration) => {
                contract.enums.push(extract_enum(enumeration));
            }
            AstNode::PragmaDirective(_)
            | AstNode::ImportDirective(_)
            | AstNode::ContractDefinition(_)
            | AstNode::Other => {}
        }
    }
}

fn extract_variable(node: &VariableNode) -> Variable {
    Variable {
        name: node.name.clone(),
        ty: render_type(node.type_name.as_ref()),
        visibility: node.visibility.clone(),
        state_variable: node.state_variable,
        storage_location: node.storage_location.clone(),
        constant: node.constant,
        mutability: node.mutability.clone(),
        function_selector: node.function_selector.clone(),
        value: node.value.as_ref().map(render_value).unwrap_or_default(),
    }
}

fn extract_function(node: &FunctionNode) -> Function {
    Function {
        name: node.name.clone(),
        kind: node.kind.clone(),
        visibility: node.visibility.clone(),
        state_mutability: node.state_mutability.clone(),
        parameters: extract_parameters(&node.parameters.parameters),
        return_parameters: extract_parameters(&node.return_parameters.parameters),
        modifiers: node
            .modifiers
            .iter()
            .map(|invocation| invocation.modifier_name.name.clone())
            .collect(),
        base_functions: node.base_functions.clone(),
        overrides: node
            .overrides
            .as_ref()
            .map(|specifier| {
                specifier
                    .overrides
                    .iter()
                    .map(|target| target.name.clone())
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn extract_event(node: &EventNode) -> Event {
    Event {
        name: node.name.clone(),
        parameters: extract_parameters(&node.parameters.parameters),
    }
}

fn extract_modifier(node: &ModifierNode) -> Modifier {
    Modifier {
        name: node.name.clone(),
        parameters: extract_parameters(&node.parameters.parameters),
    }
}

fn extract_struct(node: &StructNode) -> Struct {
    Struct {
        name: node.name.clone(),
        // Struct members always land in `members`, mapping-typed or not.
        members: node.members.iter().map(extract_variable).collect(),
    }
}

fn extract_enum(node: &EnumNode) -> Enum {
    Enum {
        name: node.name.clone(),
        values: node
            .members
            .iter()
            .filter(|member| member.node_type == "EnumValue")
            .map(|member| member.name.clone())
            .collect(),
    }
}

fn extract_parameters(nodes: &[VariableNode]) -> Vec<Parameter> {
    nodes
        .iter()
        .map(|node| Parameter {
            name: node.name.clone(),
            ty: render_type(node.type_name.as_ref()),
            indexed: node.indexed.unwrap_or(false),
        })
        .collect()
}
