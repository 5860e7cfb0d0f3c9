//! Generation options and their layering.
//!
//! Defaults are overlaid by a caller-supplied [`PartialOptions`] layer (from a
//! config file, from command-line flags, or both); set values always win.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default indentation width in spaces
pub const DEFAULT_INDENT: usize = 2;

/// Fully resolved generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Caller-supplied option layer; unset fields keep the value underneath.
///
/// Unknown keys in a config file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialOptions {
    pub indent: Option<usize>,
}

impl Options {
    /// Overlay `overrides` on top of `self`
    pub fn merge(self, overrides: &PartialOptions) -> Self {
        Self {
            indent: overrides.indent.unwrap_or(self.indent),
        }
    }

    /// Reject values the emitter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::InvalidArgument(
                "indent must be a positive number of spaces".to_string(),
            ));
        }
        Ok(())
    }
}

impl PartialOptions {
    /// Load an option layer from a YAML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading options from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|e| e.at_path(path))
    }

    /// Parse an option layer. YAML is a superset of JSON, so both are accepted.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
