//! Document-to-declarations pipeline.

use crate::emitter::TypeEmitter;
use crate::error::Result;
use crate::extractor::SchemaExtractor;
use crate::naming::{declaration_name, operation_declaration_name};
use crate::options::Options;
use log::debug;
use serde_json::Value;

/// Generates declarations for every operation request and every component schema.
///
/// Operations come first, in path and method order, then components in document
/// order. Operation declarations are named `<OperationId>Req`.
///
/// # Errors
///
/// Fails on invalid options or an operation without `operationId`; no partial
/// output is returned in either case.
pub fn generate(document: &Value, options: &Options) -> Result<String> {
    options.validate()?;

    let extraction = SchemaExtractor::new(document).extract()?;
    let mut emitter = TypeEmitter::new(options.clone());

    for (operation_id, schema) in &extraction.operations {
        emitter.emit(&operation_declaration_name(operation_id), schema);
    }
    for (name, schema) in &extraction.components {
        emitter.emit(&declaration_name(name), schema);
    }

    let output = emitter.finish();
    debug!(
        "Generated {} declarations ({} bytes)",
        extraction.operations.len() + extraction.components.len(),
        output.len()
    );
    Ok(output)
}
