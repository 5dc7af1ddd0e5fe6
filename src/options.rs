//! Doclet-style option parsing.
//!
//! The host tokenizes its command line and hands each option to the plugin
//! as a name plus argument list; [`Options::parse`] folds those into the
//! run configuration. Options the plugin does not register are left alone
//! for the host to validate.

use crate::error::Error;

pub const DEFAULT_OUTPUT: &str = "javadoc.properties";

/// One option as tokenized by the host.
#[derive(Debug, Clone)]
pub struct RawOption {
    pub name: String,
    pub args: Vec<String>,
}

impl RawOption {
    pub fn new(name: &str, args: &[&str]) -> RawOption {
        RawOption {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Registered option metadata, advertised to the host.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Canonical name first, then aliases.
    pub names: &'static [&'static str],
    pub argument_count: usize,
    pub description: &'static str,
}

pub const SUPPORTED_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        names: &["-output", "-o"],
        argument_count: 1,
        description: "The output file name including the path. Default: javadoc.properties",
    },
    OptionSpec {
        names: &["-prefix", "-p"],
        argument_count: 1,
        description: "The property prefix used for all keys. Default: empty",
    },
    OptionSpec {
        names: &["-includes", "-i"],
        argument_count: 1,
        description: "The included classes as colon (:) separated patterns. Default: all",
    },
    OptionSpec {
        names: &["-excludes", "-e"],
        argument_count: 1,
        description: "The excluded classes as colon (:) separated patterns. Default: none",
    },
];

/// Look up the registered spec an option name belongs to, if any.
pub fn find_spec(name: &str) -> Option<&'static OptionSpec> {
    SUPPORTED_OPTIONS.iter().find(|spec| spec.names.contains(&name))
}

/// Parsed run configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct Options {
    pub output: String,
    pub prefix: String,
    /// Include patterns in configured order; `None` selects everything.
    pub includes: Option<Vec<String>>,
    /// Exclude patterns in configured order; `None` excludes nothing.
    pub excludes: Option<Vec<String>>,
    /// Strip commas hugging angle brackets while cleaning comments.
    /// Repairs generics rendering artifacts of some host versions; not
    /// reachable from the option surface, set it on the parsed value.
    pub strip_angle_commas: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            output: DEFAULT_OUTPUT.to_string(),
            prefix: String::new(),
            includes: None,
            excludes: None,
            strip_angle_commas: false,
        }
    }
}

impl Options {
    /// Fold host-tokenized options into a configuration.
    ///
    /// A registered option with the wrong argument count aborts parsing;
    /// unrecognized options are skipped.
    pub fn parse(raw: &[RawOption]) -> Result<Options, Error> {
        let mut options = Options::default();
        for opt in raw {
            let Some(spec) = find_spec(&opt.name) else {
                continue;
            };
            if opt.args.len() != spec.argument_count {
                return Err(Error::InvalidOptionArity {
                    option: opt.name.clone(),
                    expected: spec.argument_count,
                    actual: opt.args.len(),
                });
            }
            let value = opt.args[0].clone();
            match spec.names[0] {
                "-output" => options.output = value,
                "-prefix" => options.prefix = value,
                "-includes" => options.includes = Some(split_patterns(&value)),
                "-excludes" => options.excludes = Some(split_patterns(&value)),
                _ => {}
            }
        }
        Ok(options)
    }
}

/// Split a colon-separated pattern list, preserving order.
fn split_patterns(value: &str) -> Vec<String> {
    value
        .split(':')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
