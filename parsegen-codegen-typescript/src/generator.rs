//! TypeScript generator producing the four declaration artifacts.

use std::path::{Path, PathBuf};

use eyre::Result;
use parsegen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use parsegen_core::{GeneratedFile, WriteResult, relative_import_path};
use parsegen_ir::ClassDescriptor;
use parsegen_schema::{OutputConfig, Runtime};
use tracing::{debug, info};

use crate::files::{AttributesFile, ClassesFile, DeclarationsFile, JsDocFile};

/// Artifact paths, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub attributes: PathBuf,
    pub classes: Option<PathBuf>,
    pub declarations: Option<PathBuf>,
    pub jsdoc: Option<PathBuf>,
}

impl OutputPaths {
    pub const DEFAULT_ATTRIBUTES: &'static str = "types/parse-class-attributes.d.ts";
    pub const DEFAULT_CLASSES: &'static str = "types/parse-classes.ts";

    /// Resolve configured paths.
    ///
    /// The attributes file is always emitted. When none of the other three
    /// artifacts is configured the class file is emitted at its default path.
    pub fn resolve(config: &OutputConfig) -> Self {
        let attributes = config
            .attributes
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_ATTRIBUTES));

        let mut classes = config.classes.clone();
        if classes.is_none() && config.declarations.is_none() && config.jsdoc.is_none() {
            classes = Some(PathBuf::from(Self::DEFAULT_CLASSES));
        }

        Self {
            attributes,
            classes,
            declarations: config.declarations.clone(),
            jsdoc: config.jsdoc.clone(),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::resolve(&OutputConfig::default())
    }
}

/// TypeScript code generator over one translated schema.
pub struct Generator {
    classes: Vec<ClassDescriptor>,
    outputs: OutputPaths,
    runtime: Runtime,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self, output_dir: &Path) -> Vec<PreviewFile> {
        self.files(output_dir)
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files(output_dir) {
            let path = file.path(output_dir);
            let shown = path.display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => {
                    info!(path = %shown, "wrote artifact");
                    result.written.push(shown);
                }
                WriteResult::Unchanged | WriteResult::Skipped => {
                    debug!(path = %shown, "artifact unchanged");
                    result.unchanged.push(shown);
                }
            }
        }

        Ok(result)
    }
}

impl Generator {
    pub fn new(classes: Vec<ClassDescriptor>, outputs: OutputPaths, runtime: Runtime) -> Self {
        Self {
            classes,
            outputs,
            runtime,
        }
    }

    /// Create a generator from a compilation context that has run translation.
    pub fn from_context(
        mut ctx: CompilationContext,
        outputs: OutputPaths,
        runtime: Runtime,
    ) -> Self {
        Self::new(ctx.take_classes(), outputs, runtime)
    }

    /// Descriptors rendered by every artifact.
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    /// Every configured artifact, attributes file first.
    ///
    /// `output_dir` anchors the attributes import specifier of each artifact.
    fn files(&self, output_dir: &Path) -> Vec<Box<dyn GeneratedFile + '_>> {
        let attributes = self.outputs.attributes.as_path();
        let module = |path: &Path| relative_import_path(output_dir, path, attributes);
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = vec![Box::new(AttributesFile::new(
            attributes,
            self.runtime,
            &self.classes,
        ))];

        if let Some(path) = &self.outputs.classes {
            files.push(Box::new(ClassesFile::new(
                path,
                module(path),
                self.runtime,
                &self.classes,
            )));
        }
        if let Some(path) = &self.outputs.declarations {
            files.push(Box::new(DeclarationsFile::new(
                path,
                module(path),
                self.runtime,
                &self.classes,
            )));
        }
        if let Some(path) = &self.outputs.jsdoc {
            files.push(Box::new(JsDocFile::new(
                path,
                module(path),
                self.runtime,
                &self.classes,
            )));
        }

        files
    }
}
