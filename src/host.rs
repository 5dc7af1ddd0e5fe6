//! JSON-backed host adapter.
//!
//! The real plugin consumes whatever model its documentation host built in
//! memory. The standalone binary stands in for such a host by loading type
//! descriptors from JSON documents: a top-level array of type entries,
//! matching the serde shape of [`TypeEntry`].

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::model::{DocModel, TypeEntry};

/// In-memory model loaded from one or more JSON documents.
#[derive(Debug, Default)]
pub struct JsonModel {
    types: Vec<TypeEntry>,
}

impl JsonModel {
    /// Load one model document, appending its types in document order.
    pub fn load(&mut self, path: &Path) -> Result<(), Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ModelRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut types: Vec<TypeEntry> =
            serde_json::from_str(&content).map_err(|source| Error::ModelParse {
                path: path.to_path_buf(),
                source,
            })?;
        self.types.append(&mut types);
        Ok(())
    }
}

impl DocModel for JsonModel {
    fn types(&self) -> &[TypeEntry] {
        &self.types
    }
}
