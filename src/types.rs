//! Type renderer: turns a type-descriptor subtree into its canonical string.

use crate::ast::TypeNode;
use crate::values::render_value;

/// Renders a type-descriptor subtree into the canonical type string.
///
/// Total by construction: a missing or unrecognized descriptor renders as
/// the empty string so that a renderer failure can never abort extraction.
///
/// # Examples
///
/// ```
/// use solscope::ast::TypeNode;
/// use solscope::types::render_type;
///
/// let node: TypeNode = serde_json::from_str(
///     r#"{"nodeType": "ElementaryTypeName", "name": "uint256"}"#,
/// ).unwrap();
/// assert_eq!(render_type(Some(&node)), "uint256");
/// assert_eq!(render_type(None), "");
/// ```
pub fn render_type(node: Option<&TypeNode>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    match node {
        TypeNode::ElementaryTypeName(elementary) => elementary.name.clone(),
        TypeNode::UserDefinedTypeName(user_defined) => {
            // Preference order: resolved type string, declared name, then
            // the name reached through the referenced path.
            if let Some(descriptions) = &user_defined.type_descriptions {
                if let Some(type_string) = &descriptions.type_string {
                    if !type_string.is_empty() {
                        return type_string.clone();
                    }
                }
            }
            if !user_defined.name.is_empty() {
                return user_defined.name.clone();
            }
            if let Some(path) = &user_defined.path_node {
                if !path.name.is_empty() {
                    return path.name.clone();
                }
            }
            String::new()
        }
        TypeNode::Mapping(mapping) => {
            let key = render_type(mapping.key_type.as_deref());
            let value = render_type(mapping.value_type.as_deref());
            format!("mapping({key} => {value})")
        }
        TypeNode::ArrayTypeName(array) => {
            let base = render_type(array.base_type.as_deref());
            let length = array
                .length
                .as_ref()
                .map(render_value)
                .unwrap_or_default();
            if length.is_empty() {
                format!("{base}[]")
            } else {
                format!("{base}[{length}]")
            }
        }
        TypeNode::Other => String::new(),
    }
}
