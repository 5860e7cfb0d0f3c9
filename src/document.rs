//! Reading API documents and writing generated output.
//!
//! Documents are decoded into a [`serde_json::Value`] tree whose objects keep the
//! input key order, whether the source was YAML or JSON.

use crate::error::{Error, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Source format of an API document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from the file extension.
    ///
    /// `.json` is JSON; everything else is read as YAML, which also accepts JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parses document text into an order-preserving value tree.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the text is not valid for `format`.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value> {
    debug!("Parsing {:?} document ({} bytes)", format, content.len());
    let document = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(document)
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Value> {
    debug!("Loading document: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| Error::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, DocumentFormat::from_path(path)).map_err(|e| e.at_path(path))
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    let io_error = |source| Error::IoError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, content).map_err(io_error)?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
