//! Generate command report data structures.

use parsegen_schema::Runtime;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema path or URL.
    pub source: String,
    pub runtime: Runtime,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Names of the generated classes, in schema order.
    pub classes: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Artifacts were written to disk; unchanged ones were left alone.
    Written {
        written: Vec<String>,
        unchanged: Vec<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// Translated descriptors as JSON.
    Descriptors(String),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { written, unchanged } => {
                self.render_written(out, written, unchanged)
            }
            GenerationResult::Preview(files) => Self::render_preview(out, files),
            GenerationResult::Descriptors(json) => out.preformatted(json),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &[String], unchanged: &[String]) {
        out.key_value("Schema", &self.source);
        out.key_value("Runtime", self.runtime.as_str());
        out.newline();

        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(class);
        }

        if !written.is_empty() {
            out.newline();
            out.section("Written");
            for path in written {
                out.added_item(path);
            }
        }

        if !unchanged.is_empty() {
            out.newline();
            out.section("Unchanged");
            for path in unchanged {
                out.list_item(path);
            }
        }
    }

    fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
