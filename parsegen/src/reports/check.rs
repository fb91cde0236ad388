//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Schema path or URL.
    pub source: String,
    /// Names of the classes that would be generated.
    pub classes: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.source));
        out.newline();
        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(class);
        }
    }
}
