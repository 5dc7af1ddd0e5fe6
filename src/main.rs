//! docprops — write doc comments from a parsed source model as key=value
//! properties.
//!
//! The generator itself runs as a plugin against a host-supplied model;
//! this binary is the JSON host harness. It loads type descriptors from
//! model files, forwards doclet-style options verbatim to the generator's
//! own option parser, and routes diagnostics to stderr:
//!
//! ```text
//! docprops -m model.json -- -output widget.properties -prefix cfg
//! docprops -m 'models/*.json' -- -includes 'com.acme.**' -excludes 'com.acme.internal.**'
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use docprops::generator::Generator;
use docprops::host::JsonModel;
use docprops::options::{Options, RawOption, SUPPORTED_OPTIONS};
use docprops::report::{Reporter, Severity, StderrReporter};

#[derive(Parser)]
#[command(
    name = "docprops",
    about = "Write doc comments from a parsed source model as key=value properties"
)]
struct Cli {
    /// Model file holding parsed type descriptors (repeatable, glob
    /// patterns supported)
    #[arg(short = 'm', long = "model", required = true)]
    models: Vec<String>,

    /// Generator options, doclet style: -output <file> -prefix <prefix>
    /// -includes <globs> -excludes <globs>. Unrecognized options are
    /// ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    options: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let matches = Cli::command()
        .after_help(doclet_options_help())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let mut reporter = StderrReporter;

    let raw = tokenize_options(&cli.options);
    let options = match Options::parse(&raw) {
        Ok(options) => options,
        Err(err) => {
            reporter.print(Severity::Error, &err.to_string());
            return Ok(false);
        }
    };

    let mut model = JsonModel::default();
    for path in expand_globs(&cli.models)? {
        model
            .load(&path)
            .with_context(|| format!("failed to load model {}", path.display()))?;
    }

    Ok(Generator::new(options).run(&model, &mut reporter))
}

/// Render the generator's registered option table for --help.
fn doclet_options_help() -> String {
    let mut help = String::from("Generator options:\n");
    for spec in SUPPORTED_OPTIONS {
        help.push_str(&format!(
            "  {:<16} {}\n",
            spec.names.join(", "),
            spec.description
        ));
    }
    help
}

/// Group raw trailing arguments into doclet-style (name, args) pairs: a
/// token starting with `-` opens an option, following plain tokens are its
/// arguments. Plain tokens before any option are ignored.
fn tokenize_options(args: &[String]) -> Vec<RawOption> {
    let mut raw: Vec<RawOption> = Vec::new();
    for arg in args {
        if arg.starts_with('-') {
            raw.push(RawOption {
                name: arg.clone(),
                args: Vec::new(),
            });
        } else if let Some(current) = raw.last_mut() {
            current.args.push(arg.clone());
        }
    }
    raw
}

/// Expand model arguments into real file paths. Plain paths pass through,
/// anything else is tried as a glob pattern; matches are sorted per
/// pattern, patterns keep their argument order.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            anyhow::bail!("no model files matched: {}", pattern);
        }
        matches.sort();
        files.append(&mut matches);
    }
    Ok(files)
}
