//! `$ref` pointer handling.
//!
//! Only document-internal pointers (`#/a/b/c`) are understood. The root pointer `#`
//! and external references (`other.yaml#/Foo`, `https://...`) are unresolvable and
//! degrade to the `any` type.

use serde_json::Value;

/// Type emitted when a reference cannot be resolved
pub const FALLBACK_TYPE: &str = "any";

const INTERNAL_PREFIX: &str = "#/";

/// A `$ref` string as found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    raw: String,
}

impl Reference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The reference exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Path segments below the document root, or `None` when the reference is
    /// not an internal pointer.
    pub fn segments(&self) -> Option<Vec<String>> {
        let rest = self.raw.strip_prefix(INTERNAL_PREFIX)?;
        Some(rest.split('/').map(unescape_segment).collect())
    }

    /// Final path segment, e.g. `Pet` for `#/components/schemas/Pet`
    pub fn target_name(&self) -> Option<String> {
        self.segments().and_then(|segments| segments.last().cloned())
    }

    /// Name to emit for this reference
    pub fn type_name(&self) -> String {
        self.target_name().unwrap_or_else(|| FALLBACK_TYPE.to_string())
    }

    /// Look the pointer up inside `document`
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        if !self.raw.starts_with(INTERNAL_PREFIX) {
            return None;
        }
        // `Value::pointer` expects the part after `#`, and handles `~0`/`~1` itself
        document.pointer(self.raw.strip_prefix('#')?)
    }
}

fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_internal_reference_segments() {
        let reference = Reference::new("#/components/schemas/Pet");
        assert_eq!(
            reference.segments(),
            Some(vec![
                "components".to_string(),
                "schemas".to_string(),
                "Pet".to_string()
            ])
        );
        assert_eq!(reference.type_name(), "Pet");
    }

    #[test]
    fn test_root_pointer_is_unresolvable() {
        let reference = Reference::new("#");
        assert_eq!(reference.segments(), None);
        assert_eq!(reference.type_name(), "any");
        assert!(reference.resolve(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_external_reference_is_unresolvable() {
        for raw in [
            "common.yaml#/components/schemas/Pet",
            "https://example.com/pet.json",
            "Pet",
        ] {
            let reference = Reference::new(raw);
            assert_eq!(reference.target_name(), None, "{}", raw);
            assert_eq!(reference.type_name(), "any");
        }
    }

    #[test]
    fn test_resolve_inside_document() {
        let document = json!({
            "components": {
                "parameters": {
                    "Limit": { "name": "limit", "in": "query", "schema": { "type": "integer" } }
                }
            }
        });
        let reference = Reference::new("#/components/parameters/Limit");
        let resolved = reference.resolve(&document).unwrap();
        assert_eq!(resolved["name"], "limit");

        assert!(Reference::new("#/components/parameters/Missing")
            .resolve(&document)
            .is_none());
    }

    #[test]
    fn test_escaped_segments() {
        let document = json!({ "paths": { "/pets": { "get": { "ok": true } } } });
        let reference = Reference::new("#/paths/~1pets/get");
        assert_eq!(reference.target_name().as_deref(), Some("get"));
        assert_eq!(reference.resolve(&document).unwrap()["ok"], true);

        assert_eq!(
            Reference::new("#/definitions/a~1b").target_name().as_deref(),
            Some("a/b")
        );
    }
}
