//! Read-only source model supplied by the documentation host.

use serde::{Deserialize, Serialize};

/// A class-like declaration with its doc comment and declared fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Fully qualified name, e.g. `com.acme.Widget`.
    pub qualified_name: String,
    /// Simple name, e.g. `Widget`.
    pub simple_name: String,
    /// Doc comment body, absent when the declaration is undocumented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Declared fields in declaration order. Inherited fields are not part
    /// of the model.
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

/// A declared field with its doc comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The capability interface the generator is written against.
///
/// One implementation per host environment; [`crate::host::JsonModel`]
/// backs the standalone binary, a plain `Vec` backs embedded use and tests.
pub trait DocModel {
    fn types(&self) -> &[TypeEntry];
}

impl DocModel for Vec<TypeEntry> {
    fn types(&self) -> &[TypeEntry] {
        self
    }
}
