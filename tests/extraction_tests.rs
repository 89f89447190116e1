// tests/extraction_tests.rs
//
// Engine-level tests: documents are built as JSON values, decoded into the
// source schema, and run through the extraction engine directly.

use std::path::Path;

use solscope::ast::SourceDocument;
use solscope::errors::ExplorerError;
use solscope::extract::extract;
use solscope::model::Contract;

fn document(value: serde_json::Value) -> SourceDocument {
    serde_json::from_value(value).unwrap()
}

fn extract_ok(value: serde_json::Value) -> Contract {
    extract(&document(value), Path::new("test.json")).unwrap()
}

#[test]
fn test_pragma_and_contract_name() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "PragmaDirective", "literals": ["solidity", "^", "0.8", ".0"]},
            {"nodeType": "ContractDefinition", "name": "Foo", "baseContracts": [], "nodes": []},
        ]},
    }));
    assert_eq!(contract.name, "Foo");
    assert_eq!(contract.pragma, "pragma solidity^0.8.0;");
    assert!(contract.inherits.is_empty());
}

#[test]
fn test_document_name_takes_precedence_over_definition() {
    let contract = extract_ok(serde_json::json!({
        "contractName": "Wrapped",
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Inner", "nodes": []},
        ]},
    }));
    assert_eq!(contract.name, "Wrapped");
}

#[test]
fn test_repeated_pragma_last_wins() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "PragmaDirective", "literals": ["solidity", "^", "0.7", ".0"]},
            {"nodeType": "PragmaDirective", "literals": ["solidity", "^", "0.8", ".0"]},
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": []},
        ]},
    }));
    assert_eq!(contract.pragma, "pragma solidity^0.8.0;");
}

#[test]
fn test_empty_document_is_missing_ast() {
    let result = extract(
        &document(serde_json::json!({"contractName": "Empty", "ast": {"nodes": []}})),
        Path::new("empty.json"),
    );
    assert!(matches!(result, Err(ExplorerError::MissingAst { .. })));
}

#[test]
fn test_imports_preserve_order_and_alias() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ImportDirective", "absolutePath": "contracts/A.sol", "file": "./A.sol"},
            {"nodeType": "ImportDirective", "absolutePath": "contracts/B.sol", "file": "./B.sol", "name": "Base"},
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": []},
        ]},
    }));
    assert_eq!(contract.imports.len(), 2);
    assert_eq!(contract.imports[0].absolute_path, "contracts/A.sol");
    assert_eq!(contract.imports[0].alias, "");
    assert_eq!(contract.imports[1].file, "./B.sol");
    assert_eq!(contract.imports[1].alias, "Base");
}

#[test]
fn test_inheritance_preserves_order_and_duplicates() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Foo", "baseContracts": [
                {"baseName": {"name": "Ownable"}},
                {"baseName": {"name": "IFoo"}},
                {"baseName": {"name": "Ownable"}},
            ], "nodes": []},
        ]},
    }));
    assert_eq!(contract.inherits, vec!["Ownable", "IFoo", "Ownable"]);
}

#[test]
fn test_mapping_declaration_lands_in_mappings() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Token", "nodes": [
                {"nodeType": "VariableDeclaration", "name": "balances", "stateVariable": true,
                 "typeName": {"nodeType": "Mapping",
                              "keyType": {"nodeType": "ElementaryTypeName", "name": "address"},
                              "valueType": {"nodeType": "ElementaryTypeName", "name": "uint256"}}},
                {"nodeType": "VariableDeclaration", "name": "totalSupply", "stateVariable": true,
                 "typeName": {"nodeType": "ElementaryTypeName", "name": "uint256"}},
            ]},
        ]},
    }));
    assert_eq!(contract.mappings.len(), 1);
    assert_eq!(contract.mappings[0].name, "balances");
    assert_eq!(contract.mappings[0].ty, "mapping(address => uint256)");
    assert_eq!(contract.variables.len(), 1);
    assert_eq!(contract.variables[0].name, "totalSupply");
}

#[test]
fn test_variable_fields_and_initializer() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Token", "nodes": [
                {"nodeType": "VariableDeclaration", "name": "cap", "visibility": "internal",
                 "stateVariable": true, "constant": true, "mutability": "constant",
                 "storageLocation": "default", "functionSelector": "355274ea",
                 "value": {"nodeType": "BinaryOperation", "operator": "*",
                           "leftExpression": {"nodeType": "Literal", "value": "10"},
                           "rightExpression": {"nodeType": "BinaryOperation", "operator": "**",
                                               "leftExpression": {"nodeType": "Literal", "value": "10"},
                                               "rightExpression": {"nodeType": "Literal", "value": "18"}}},
                 "typeName": {"nodeType": "ElementaryTypeName", "name": "uint256"}},
            ]},
        ]},
    }));
    let cap = &contract.variables[0];
    assert_eq!(cap.ty, "uint256");
    assert_eq!(cap.visibility, "internal");
    assert!(cap.state_variable);
    assert!(cap.constant);
    assert_eq!(cap.mutability, "constant");
    assert_eq!(cap.function_selector, "355274ea");
    assert_eq!(cap.value, "(10 * (10 ** 18))");
}

#[test]
fn test_constructor_occupies_dedicated_slot() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": [
                {"nodeType": "FunctionDefinition", "name": "", "kind": "constructor",
                 "parameters": {"parameters": [
                     {"name": "owner", "typeName": {"nodeType": "ElementaryTypeName", "name": "address"}},
                 ]},
                 "returnParameters": {"parameters": []}},
            ]},
        ]},
    }));
    let constructor = contract.constructor.expect("constructor slot");
    assert_eq!(constructor.kind, "constructor");
    assert_eq!(constructor.parameters.len(), 1);
    assert_eq!(constructor.parameters[0].name, "owner");
    assert_eq!(constructor.parameters[0].ty, "address");
    assert!(contract.functions.is_empty());
}

#[test]
fn test_duplicate_constructors_last_wins() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": [
                {"nodeType": "FunctionDefinition", "name": "", "kind": "constructor",
                 "parameters": {"parameters": [
                     {"name": "first", "typeName": {"nodeType": "ElementaryTypeName", "name": "address"}},
                 ]}},
                {"nodeType": "FunctionDefinition", "name": "", "kind": "constructor",
                 "parameters": {"parameters": [
                     {"name": "second", "typeName": {"nodeType": "ElementaryTypeName", "name": "uint256"}},
                 ]}},
            ]},
        ]},
    }));
    let constructor = contract.constructor.expect("constructor slot");
    assert_eq!(constructor.parameters[0].name, "second");
    assert!(contract.functions.is_empty());
}

#[test]
fn test_function_modifiers_overrides_and_returns() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": [
                {"nodeType": "FunctionDefinition", "name": "withdraw", "kind": "function",
                 "visibility": "external", "stateMutability": "nonpayable",
                 "modifiers": [
                     {"nodeType": "ModifierInvocation", "modifierName": {"name": "nonReentrant"}},
                     {"nodeType": "ModifierInvocation", "modifierName": {"name": "onlyOwner"}},
                 ],
                 "baseFunctions": [421, 508],
                 "overrides": {"nodeType": "OverrideSpecifier", "overrides": [{"name": "IVault"}]},
                 "parameters": {"parameters": [
                     {"name": "amount", "typeName": {"nodeType": "ElementaryTypeName", "name": "uint256"}},
                 ]},
                 "returnParameters": {"parameters": [
                     {"name": "", "typeName": {"nodeType": "ElementaryTypeName", "name": "bool"}},
                 ]}},
            ]},
        ]},
    }));
    let withdraw = &contract.functions[0];
    assert_eq!(withdraw.name, "withdraw");
    assert_eq!(withdraw.visibility, "external");
    assert_eq!(withdraw.state_mutability, "nonpayable");
    assert_eq!(withdraw.modifiers, vec!["nonReentrant", "onlyOwner"]);
    assert_eq!(withdraw.base_functions, vec![421, 508]);
    assert_eq!(withdraw.overrides, vec!["IVault"]);
    assert_eq!(withdraw.return_parameters.len(), 1);
    assert_eq!(withdraw.return_parameters[0].ty, "bool");
}

#[test]
fn test_event_indexed_flags() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Token", "nodes": [
                {"nodeType": "EventDefinition", "name": "Transfer",
                 "parameters": {"parameters": [
                     {"name": "from", "indexed": true,
                      "typeName": {"nodeType": "ElementaryTypeName", "name": "address"}},
                     {"name": "value", "indexed": false,
                      "typeName": {"nodeType": "ElementaryTypeName", "name": "uint256"}},
                     {"name": "memo",
                      "typeName": {"nodeType": "ElementaryTypeName", "name": "string"}},
                 ]}},
            ]},
        ]},
    }));
    let transfer = &contract.events[0];
    assert_eq!(transfer.name, "Transfer");
    assert_eq!(transfer.parameters[0].name, "from");
    assert_eq!(transfer.parameters[0].ty, "address");
    assert!(transfer.parameters[0].indexed);
    assert!(!transfer.parameters[1].indexed);
    // Absent in the source means not indexed.
    assert!(!transfer.parameters[2].indexed);
}

#[test]
fn test_struct_members_are_never_split() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Vault", "nodes": [
                {"nodeType": "StructDefinition", "name": "Position", "members": [
                    {"nodeType": "VariableDeclaration", "name": "owner",
                     "typeName": {"nodeType": "ElementaryTypeName", "name": "address"}},
                    {"nodeType": "VariableDeclaration", "name": "claims",
                     "typeName": {"nodeType": "Mapping",
                                  "keyType": {"nodeType": "ElementaryTypeName", "name": "uint256"},
                                  "valueType": {"nodeType": "ElementaryTypeName", "name": "bool"}}},
                ]},
            ]},
        ]},
    }));
    let position = &contract.structs[0];
    assert_eq!(position.name, "Position");
    assert_eq!(position.members.len(), 2);
    assert_eq!(position.members[1].ty, "mapping(uint256 => bool)");
    assert!(contract.mappings.is_empty());
    assert!(contract.variables.is_empty());
}

#[test]
fn test_enum_values_in_order() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "Vault", "nodes": [
                {"nodeType": "EnumDefinition", "name": "Status", "members": [
                    {"nodeType": "EnumValue", "name": "Open"},
                    {"nodeType": "StructuredDocumentation", "name": "ignored"},
                    {"nodeType": "EnumValue", "name": "Closed"},
                ]},
            ]},
        ]},
    }));
    assert_eq!(contract.enums[0].name, "Status");
    assert_eq!(contract.enums[0].values, vec!["Open", "Closed"]);
}

#[test]
fn test_unknown_kinds_are_skipped_silently() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "UserDefinedValueTypeDefinition", "name": "Shares"},
            {"nodeType": "ContractDefinition", "name": "Foo", "nodes": [
                {"nodeType": "UsingForDirective"},
                {"nodeType": "ErrorDefinition", "name": "Unauthorized"},
                {"nodeType": "VariableDeclaration", "name": "kept", "stateVariable": true,
                 "typeName": {"nodeType": "ElementaryTypeName", "name": "uint8"}},
            ]},
        ]},
    }));
    assert_eq!(contract.name, "Foo");
    assert_eq!(contract.variables.len(), 1);
    assert_eq!(contract.variables[0].name, "kept");
}

#[test]
fn test_only_first_contract_definition_is_processed() {
    let contract = extract_ok(serde_json::json!({
        "ast": {"nodes": [
            {"nodeType": "ContractDefinition", "name": "First", "nodes": [
                {"nodeType": "FunctionDefinition", "name": "a", "kind": "function"},
            ]},
            {"nodeType": "ContractDefinition", "name": "Second", "baseContracts": [
                {"baseName": {"name": "First"}},
            ], "nodes": [
                {"nodeType": "FunctionDefinition", "name": "b", "kind": "function"},
            ]},
        ]},
    }));
    assert_eq!(contract.name, "First");
    assert_eq!(contract.functions.len(), 1);
    assert_eq!(contract.functions[0].name, "a");
    assert!(contract.inherits.is_empty());
}
