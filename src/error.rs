//! Error taxonomy for the generator.
//!
//! Nothing here escapes to the host as a panic: the generator entry point
//! converts every variant into an error diagnostic plus a failed result.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An option was supplied with the wrong number of arguments.
    #[error("{option} option expects exactly {expected} argument(s), got {actual}")]
    InvalidOptionArity {
        option: String,
        expected: usize,
        actual: usize,
    },

    /// An include/exclude glob did not compile to a matcher.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The properties file could not be created or written.
    #[error("Could not write to properties file: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A model document could not be read.
    #[error("could not read model file {}: {source}", path.display())]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A model document could not be deserialized.
    #[error("invalid model file {}: {source}", path.display())]
    ModelParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
