//! Value reconstructor: turns constant and initializer expressions back
//! into readable text.
//!
//! This is a bounded pretty-printer for the expression subset found in
//! constant positions. It never evaluates or folds anything, and it never
//! fails: unsupported shapes render as the empty string.

use serde_json::Value as JsonValue;

use crate::ast::ExprNode;

/// Renders an initializer value, which the compiler emits either as a raw
/// scalar or as a nested expression node.
///
/// # Examples
///
/// ```
/// use solscope::values::render_value;
///
/// assert_eq!(render_value(&serde_json::json!("100")), "100");
/// assert_eq!(
///     render_value(&serde_json::json!({
///         "nodeType": "Identifier",
///         "name": "MAX_SUPPLY",
///     })),
///     "MAX_SUPPLY"
/// );
/// ```
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Object(_) => serde_json::from_value::<ExprNode>(value.clone())
            .map(|expr| render_expr(&expr))
            .unwrap_or_default(),
        scalar => scalar_text(scalar),
    }
}

/// Renders a decoded expression node.
pub fn render_expr(expr: &ExprNode) -> String {
    match expr {
        ExprNode::Literal(literal) => {
            let plain = literal
                .value
                .as_ref()
                .map(scalar_text)
                .unwrap_or_default();
            if plain.is_empty() {
                literal.hex_value.clone()
            } else {
                plain
            }
        }
        ExprNode::Identifier(identifier) => identifier.name.clone(),
        ExprNode::UnaryOperation(unary) => {
            let operand = unary
                .sub_expression
                .as_deref()
                .map(render_expr)
                .unwrap_or_default();
            format!("{}{}", unary.operator, operand)
        }
        ExprNode::BinaryOperation(binary) => {
            let left = binary
                .left_expression
                .as_deref()
                .map(render_expr)
                .unwrap_or_default();
            let right = binary
                .right_expression
                .as_deref()
                .map(render_expr)
                .unwrap_or_default();
            format!("({} {} {})", left, binary.operator, right)
        }
        ExprNode::FunctionCall(call) => {
            let callee = match call.expression.as_deref() {
                // The common `f(...)` case reads better as the bare name.
                Some(ExprNode::Identifier(identifier)) => identifier.name.clone(),
                Some(other) => render_expr(other),
                None => String::new(),
            };
            let arguments = call
                .arguments
                .iter()
                .map(render_value)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{callee}({arguments})")
        }
        ExprNode::Other => String::new(),
    }
}

fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Number(number) => number.to_string(),
        JsonValue::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
