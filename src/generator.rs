//! The generator run: filter types, format lines, write the file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::emit::{clean_comment, normalize_prefix, property_key, PropertyLine};
use crate::error::Error;
use crate::filter::TypeFilter;
use crate::model::DocModel;
use crate::options::Options;
use crate::report::{Reporter, Severity};

/// Converts the host-supplied model into a properties file.
pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Generator {
        Generator { options }
    }

    /// Plugin entry point. Returns `true` when the run succeeded; every
    /// failure is routed through the reporter, nothing escapes.
    pub fn run(&self, model: &dyn DocModel, reporter: &mut dyn Reporter) -> bool {
        match self.try_run(model, reporter) {
            Ok(()) => true,
            Err(err) => {
                reporter.print(Severity::Error, &err.to_string());
                false
            }
        }
    }

    fn try_run(&self, model: &dyn DocModel, reporter: &mut dyn Reporter) -> Result<(), Error> {
        let filter = TypeFilter::new(&self.options)?;
        let lines = self.collect_lines(model, &filter, reporter);
        self.write_output(&lines, reporter)
    }

    /// Walk the model in supplied order: one line per selected type, then
    /// one per declared field.
    fn collect_lines(
        &self,
        model: &dyn DocModel,
        filter: &TypeFilter,
        reporter: &mut dyn Reporter,
    ) -> Vec<PropertyLine> {
        let prefix = normalize_prefix(&self.options.prefix);
        let mut lines = Vec::new();

        for entry in model.types() {
            if !filter.select(&entry.qualified_name, reporter) {
                continue;
            }
            let type_key = format!("{}{}", prefix, property_key(&entry.simple_name));
            lines.push(self.property_line(
                type_key.clone(),
                &entry.simple_name,
                entry.comment.as_deref(),
                reporter,
            ));

            let field_prefix = normalize_prefix(&type_key);
            for field in &entry.fields {
                lines.push(self.property_line(
                    format!("{}{}", field_prefix, property_key(&field.name)),
                    &format!("{}.{}", entry.simple_name, field.name),
                    field.comment.as_deref(),
                    reporter,
                ));
            }
        }

        lines
    }

    /// Resolve one element into a line. A missing comment yields an empty
    /// value and a warning, never a failure.
    fn property_line(
        &self,
        key: String,
        label: &str,
        comment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> PropertyLine {
        let value = match comment {
            Some(text) => clean_comment(text, self.options.strip_angle_commas),
            None => {
                reporter.print(
                    Severity::Warning,
                    &format!("Missing comment on property '{}'", label),
                );
                String::new()
            }
        };
        PropertyLine { key, value }
    }

    /// Flush the accumulated lines to the output file in one write.
    fn write_output(&self, lines: &[PropertyLine], reporter: &mut dyn Reporter) -> Result<(), Error> {
        let path = Path::new(&self.options.output);
        let mut file = File::create(path).map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        reporter.print(
            Severity::Note,
            &format!("Writing to {}", absolute(path).display()),
        );
        file.write_all(render(lines).as_bytes())
            .map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn render(lines: &[PropertyLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.key);
        out.push('=');
        out.push_str(&line.value);
        out.push('\n');
    }
    out
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
