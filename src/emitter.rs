//! TypeScript declaration emitter.
//!
//! Walks one [`SchemaNode`] tree per declaration and appends the rendered text to a
//! shared buffer. Nesting state lives in an [`EmitScope`] that is created for each
//! declaration and threaded through the recursion, so declarations never share
//! indentation or open blocks.
//!
//! ```
//! use openapi_typegen::emitter::TypeEmitter;
//! use openapi_typegen::options::Options;
//! use openapi_typegen::schema::SchemaNode;
//! use serde_json::json;
//!
//! let schema = SchemaNode::from_value(&json!({
//!     "type": "object",
//!     "required": ["id"],
//!     "properties": { "id": { "type": "integer" }, "tag": { "type": "string" } }
//! }));
//!
//! let mut emitter = TypeEmitter::new(Options::default());
//! emitter.emit("Pet", &schema);
//! assert_eq!(
//!     emitter.finish(),
//!     "export interface Pet {\n  id: number;\n  tag?: string;\n}\n\n\n"
//! );
//! ```

use crate::naming::property_key;
use crate::options::Options;
use crate::schema::{ObjectSchema, SchemaNode};
use log::debug;

/// Kind of an open block, deciding how it is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Closed with `}`
    Object,
    /// Closed with `}[]`
    ArrayOfObject,
}

impl ScopeKind {
    fn closer(&self) -> &'static str {
        match self {
            ScopeKind::Object => "}",
            ScopeKind::ArrayOfObject => "}[]",
        }
    }
}

/// Open blocks and current depth while emitting one declaration.
#[derive(Debug, Default)]
pub struct EmitScope {
    kinds: Vec<ScopeKind>,
    depth: usize,
}

impl EmitScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a block one level deeper
    pub fn enter(&mut self, kind: ScopeKind) {
        self.kinds.push(kind);
        self.depth += 1;
    }

    /// Close the innermost block. The depth drops before the closing line is
    /// written, so closers sit one level shallower than the block's contents.
    pub fn exit(&mut self) -> Option<ScopeKind> {
        let kind = self.kinds.pop()?;
        self.depth -= 1;
        Some(kind)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// No open blocks left
    pub fn is_closed(&self) -> bool {
        self.kinds.is_empty() && self.depth == 0
    }
}

/// Accumulates declarations into one text buffer.
pub struct TypeEmitter {
    options: Options,
    buffer: String,
}

impl TypeEmitter {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            buffer: String::new(),
        }
    }

    /// Append the declaration `name` for `schema`.
    ///
    /// References become a one-line type alias and objects become an interface
    /// block. Any other root shape emits nothing.
    pub fn emit(&mut self, name: &str, schema: &SchemaNode) {
        let mut scope = EmitScope::new();

        match schema {
            SchemaNode::Reference(reference) => {
                debug!("Emitting alias {} -> {}", name, reference.as_str());
                self.write_line(
                    &scope,
                    &format!("export type {} = {}", name, reference.type_name()),
                );
            }
            SchemaNode::Object(object) => {
                debug!("Emitting interface {} ({} properties)", name, object.properties.len());
                self.write_line(&scope, &format!("export interface {} {{", name));
                scope.enter(ScopeKind::Object);
                self.emit_properties(&mut scope, object);
                self.exit_scope(&mut scope, true);
                self.write_line(&scope, "\n");
            }
            other => {
                debug!("Skipping {}: a {} cannot be declared", name, other.type_name());
            }
        }

        debug_assert!(scope.is_closed(), "unbalanced scope after {}", name);
    }

    /// Text emitted so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn emit_properties(&mut self, scope: &mut EmitScope, object: &ObjectSchema) {
        for (name, node) in &object.properties {
            let optional = if object.is_required(name) { "" } else { "?" };
            let field = format!("{}{}", property_key(name), optional);

            match node {
                SchemaNode::Array(element) if element.is_scalar() => {
                    self.write_line(scope, &format!("{}: {}[];", field, element.type_name()));
                }
                SchemaNode::Array(element) => {
                    self.write_line(scope, &format!("{}: {{", field));
                    scope.enter(ScopeKind::ArrayOfObject);
                    // Nested arrays open an empty block here
                    if let SchemaNode::Object(element_object) = &**element {
                        self.emit_properties(scope, element_object);
                    }
                    self.exit_scope(scope, false);
                }
                SchemaNode::Object(nested) => {
                    self.write_line(scope, &format!("{}: {{", field));
                    scope.enter(ScopeKind::Object);
                    self.emit_properties(scope, nested);
                    self.exit_scope(scope, false);
                }
                scalar => {
                    self.write_line(scope, &format!("{}: {};", field, scalar.type_name()));
                }
            }
        }
    }

    /// Close the innermost block; only the root block goes without `;`
    fn exit_scope(&mut self, scope: &mut EmitScope, root: bool) {
        let Some(kind) = scope.exit() else {
            return;
        };
        let terminator = if root { "" } else { ";" };
        self.write_line(scope, &format!("{}{}", kind.closer(), terminator));
    }

    fn write_line(&mut self, scope: &EmitScope, line: &str) {
        self.buffer.push_str(&" ".repeat(scope.depth() * self.options.indent));
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}
