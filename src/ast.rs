//! Source-side schema for compiler-emitted contract AST documents.
//!
//! The compiler represents every tree node as one flat JSON object whose
//! shape is selected by its `nodeType` field. This module models each
//! recognized shape as its own tagged variant so every dispatch site in the
//! extraction engine matches exhaustively. Kinds the crate does not
//! recognize deserialize into the `Other` catch-all and are skipped, never
//! rejected.

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// One contract compilation unit: an optional contract name plus the AST
/// emitted for its source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub ast: AstRoot,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AstRoot {
    #[serde(default)]
    pub nodes: Vec<AstNode>,
}

/// A node of the compiler AST, discriminated by `nodeType`.
///
/// The same enum covers both top-level nodes (pragma, import, contract
/// definition) and contract members (variables, functions, events, ...);
/// each dispatch site ignores the kinds that cannot appear at its level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "nodeType")]
pub enum AstNode {
    PragmaDirective(PragmaNode),
    ImportDirective(ImportNode),
    ContractDefinition(ContractNode),
    VariableDeclaration(VariableNode),
    FunctionDefinition(FunctionNode),
    EventDefinition(EventNode),
    ModifierDefinition(ModifierNode),
    StructDefinition(StructNode),
    EnumDefinition(EnumNode),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PragmaNode {
    #[serde(default)]
    pub literals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportNode {
    #[serde(default)]
    pub absolute_path: String,
    #[serde(default)]
    pub file: String,
    /// Alias the unit is imported under; empty when the import is unaliased.
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_contracts: Vec<BaseContract>,
    /// Member declarations, in source order.
    #[serde(default)]
    pub nodes: Vec<AstNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseContract {
    #[serde(default)]
    pub base_name: NamedRef,
}

/// A bare `{ "name": ... }` reference. The compiler uses this shape for base
/// names, modifier names, identifier paths, and override targets alike.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub state_variable: bool,
    #[serde(default)]
    pub storage_location: String,
    #[serde(default)]
    pub constant: bool,
    /// Mutability tag, e.g. `immutable`.
    #[serde(default)]
    pub mutability: String,
    #[serde(default)]
    pub function_selector: String,
    /// Only emitted for event parameters.
    #[serde(default)]
    pub indexed: Option<bool>,
    /// Initializer expression: either a raw scalar or a nested expression
    /// node, so it stays a generic value until rendered.
    #[serde(default)]
    pub value: Option<JsonValue>,
    #[serde(default)]
    pub type_name: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionNode {
    #[serde(default)]
    pub name: String,
    /// `function`, `constructor`, `fallback`, or `receive`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub state_mutability: String,
    #[serde(default)]
    pub parameters: ParameterList,
    #[serde(default)]
    pub return_parameters: ParameterList,
    #[serde(default)]
    pub modifiers: Vec<ModifierInvocation>,
    #[serde(default)]
    pub base_functions: Vec<i64>,
    #[serde(default)]
    pub overrides: Option<OverrideSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParameterList {
    #[serde(default)]
    pub parameters: Vec<VariableNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierInvocation {
    #[serde(default)]
    pub modifier_name: NamedRef,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OverrideSpecifier {
    #[serde(default)]
    pub overrides: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: ParameterList,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ModifierNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: ParameterList,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StructNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<VariableNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EnumNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

/// Enum members keep their `nodeType` so extraction can take only the
/// `EnumValue` children.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    #[serde(default)]
    pub node_type: String,
    #[serde(default)]
    pub name: String,
}

/// A type-descriptor subtree, discriminated by `nodeType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "nodeType")]
pub enum TypeNode {
    ElementaryTypeName(ElementaryType),
    UserDefinedTypeName(UserDefinedType),
    Mapping(MappingType),
    ArrayTypeName(ArrayType),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ElementaryType {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path_node: Option<NamedRef>,
    #[serde(default)]
    pub type_descriptions: Option<TypeDescriptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptions {
    #[serde(default)]
    pub type_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingType {
    #[serde(default)]
    pub key_type: Option<Box<TypeNode>>,
    #[serde(default)]
    pub value_type: Option<Box<TypeNode>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayType {
    #[serde(default)]
    pub base_type: Option<Box<TypeNode>>,
    /// Length expression of a fixed-size array; absent for dynamic arrays.
    #[serde(default)]
    pub length: Option<JsonValue>,
}

/// An expression subtree as found in constant and initializer positions,
/// discriminated by `nodeType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "nodeType")]
pub enum ExprNode {
    Literal(LiteralExpr),
    Identifier(NamedRef),
    UnaryOperation(UnaryExpr),
    BinaryOperation(BinaryExpr),
    FunctionCall(CallExpr),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralExpr {
    #[serde(default)]
    pub value: Option<JsonValue>,
    #[serde(default)]
    pub hex_value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryExpr {
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub sub_expression: Option<Box<ExprNode>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryExpr {
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub left_expression: Option<Box<ExprNode>>,
    #[serde(default)]
    pub right_expression: Option<Box<ExprNode>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CallExpr {
    /// The call target; a plain identifier for the common `f(...)` case.
    #[serde(default)]
    pub expression: Option<Box<ExprNode>>,
    /// Arguments may be expression nodes or raw scalars.
    #[serde(default)]
    pub arguments: Vec<JsonValue>,
}
