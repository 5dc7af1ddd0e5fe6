//! docprops — turn doc comments into a Java-properties file.
//!
//! The generator runs as a plugin inside a documentation host: the host
//! parses the source, hands over a read-only model of types, fields and
//! their comments ([`model::DocModel`]) plus a diagnostic sink
//! ([`report::Reporter`]), and collects a boolean result. The generator
//! walks the model, filters types by include/exclude globs, derives a
//! property key per class and field, and writes one `key=value` line each.

pub mod emit;
pub mod error;
pub mod filter;
pub mod generator;
pub mod host;
pub mod model;
pub mod options;
pub mod pattern;
pub mod report;

pub use error::Error;
pub use generator::Generator;
pub use options::Options;
