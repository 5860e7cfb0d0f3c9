//! OpenAPI Type Generator - TypeScript declarations from OpenAPI documents.
//!
//! This library turns an OpenAPI document into TypeScript declarations: one
//! `<OperationId>Req` interface per operation describing its request inputs, and
//! one declaration per reusable component schema.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`document`] - Loads YAML/JSON documents into an order-preserving value tree
//! 2. [`extractor`] - Normalizes each operation's parameters and body into one object schema
//! 3. [`schema`] - The closed schema model both stages agree on
//! 4. [`emitter`] - Recursively renders schemas into declaration text
//! 5. [`generator`] - Runs extraction and emission over a whole document
//! 6. [`options`] - Generation options and their layering
//!
//! # Example Usage
//!
//! ```
//! use openapi_typegen::{
//!     document::{parse_document, DocumentFormat},
//!     generator::generate,
//!     options::Options,
//! };
//!
//! let yaml = r#"
//! paths:
//!   /pets/{id}:
//!     get:
//!       operationId: getPet
//!       parameters:
//!         - name: id
//!           in: path
//!           required: true
//!           schema:
//!             type: string
//! "#;
//!
//! let document = parse_document(yaml, DocumentFormat::Yaml).unwrap();
//! let output = generate(&document, &Options::default()).unwrap();
//! assert!(output.starts_with("export interface GetPetReq {"));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod document;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod naming;
pub mod options;
pub mod reference;
pub mod schema;
