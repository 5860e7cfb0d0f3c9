//! Identifier conventions for emitted declarations and property keys.

use heck::ToPascalCase;

/// Suffix appended to operation ids before casing
pub const REQUEST_SUFFIX: &str = "Req";

/// Declaration name for a component or already-suffixed operation name
pub fn declaration_name(raw: &str) -> String {
    raw.to_pascal_case()
}

/// Declaration name for an operation's request type, e.g. `listPets` → `ListPetsReq`
pub fn operation_declaration_name(operation_id: &str) -> String {
    declaration_name(&format!("{}{}", operation_id, REQUEST_SUFFIX))
}

/// Property key as written inside a declaration block.
///
/// Names that are not plain identifiers (header names like `X-Request-Id`,
/// names with spaces, leading digits) are quoted.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
