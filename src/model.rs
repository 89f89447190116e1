//! The queryable domain model built from one contract document.
//!
//! Every entity here is built once by the extraction engine and never
//! mutated afterward. Collections preserve source declaration order, and
//! type fields always hold the rendered canonical string, never a reference
//! back into the source tree.

use serde::Serialize;

/// A single contract's declarations, keyed by `name` in the registry.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Contract {
    pub name: String,
    pub pragma: String,
    pub imports: Vec<Import>,
    /// Inherited contract names in declaration order, duplicates preserved.
    pub inherits: Vec<String>,
    pub constructor: Option<Function>,
    pub variables: Vec<Variable>,
    /// State variables whose type subtree is a mapping. A declaration lands
    /// here or in `variables`, never both.
    pub mappings: Vec<Variable>,
    pub functions: Vec<Function>,
    pub events: Vec<Event>,
    pub modifiers: Vec<Modifier>,
    pub structs: Vec<Struct>,
    pub enums: Vec<Enum>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Import {
    pub absolute_path: String,
    pub file: String,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub visibility: String,
    pub state_variable: bool,
    pub storage_location: String,
    pub constant: bool,
    /// Mutability tag, e.g. `immutable`; empty for ordinary variables.
    pub mutability: String,
    pub function_selector: String,
    /// Rendered initializer expression; empty when the declaration has none.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Function {
    /// Empty for constructor, fallback, and receive functions.
    pub name: String,
    pub kind: String,
    pub visibility: String,
    pub state_mutability: String,
    pub parameters: Vec<Parameter>,
    pub return_parameters: Vec<Parameter>,
    /// Modifier names in application order.
    pub modifiers: Vec<String>,
    pub base_functions: Vec<i64>,
    /// Names of the contracts this function overrides.
    pub overrides: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Event {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Modifier {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Struct {
    pub name: String,
    /// Members keep the `Variable` shape and are never split by
    /// mapping/variable classification.
    pub members: Vec<Variable>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Meaningful only for event parameters; false unless the source sets it.
    pub indexed: bool,
}
