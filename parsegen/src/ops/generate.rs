//! Generate operation - declaration files from schema entries.

use std::path::Path;

use eyre::{Context, Result};
use parsegen_codegen::{
    language::LanguageCodegen,
    pipeline::{CompilationContext, Pipeline},
};
use parsegen_codegen_typescript::{Generator, OutputPaths};
use parsegen_schema::{NameOverrideMap, Runtime, SchemaEntry};
use tracing::debug;

use super::describe;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory every artifact path is joined to.
    pub output_dir: &'a Path,
    pub outputs: OutputPaths,
    pub runtime: Runtime,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Print the translated descriptors instead of any artifact.
    pub dump_descriptors: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline over the entries and emits every configured artifact.
pub fn generate(
    source: String,
    entries: Vec<SchemaEntry>,
    overrides: NameOverrideMap,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    debug!(source = %source, entries = entries.len(), "generating");
    let mut ctx = CompilationContext::new(entries, overrides);
    let outcome = Pipeline::new().execute(&mut ctx);
    if let Err(err) = outcome {
        let errors: Vec<String> = ctx.errors().map(ToString::to_string).collect();
        if errors.is_empty() {
            return Err(err);
        }
        return Err(err.wrap_err(errors.join("\n")));
    }

    let warnings: Vec<String> = ctx.warnings().map(describe).collect();
    let classes: Vec<String> = ctx.classes().iter().map(|c| c.name.clone()).collect();

    let result = if opts.dump_descriptors {
        let json = serde_json::to_string_pretty(ctx.classes())
            .wrap_err("Failed to serialize class descriptors")?;
        GenerationResult::Descriptors(json)
    } else {
        let generator = Generator::from_context(ctx, opts.outputs, opts.runtime);
        if opts.dry_run {
            let files = generator
                .preview(opts.output_dir)
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect();
            GenerationResult::Preview(files)
        } else {
            let written = generator
                .generate(opts.output_dir)
                .wrap_err("Failed to generate code")?;
            GenerationResult::Written {
                written: written.written,
                unchanged: written.unchanged,
            }
        }
    };

    Ok(GenerateReport {
        source,
        runtime: opts.runtime,
        warnings,
        classes,
        result,
    })
}

#[cfg(test)]
mod tests {
    use parsegen_schema::{BuiltinKind, FieldDescriptor, FieldKind, OutputConfig};
    use tempfile::TempDir;

    use super::*;

    fn entries() -> Vec<SchemaEntry> {
        vec![
            SchemaEntry::new("_User").field("nickname", FieldDescriptor::new(FieldKind::String)),
            SchemaEntry::new("Post")
                .field("title", FieldDescriptor::new(FieldKind::String).required())
                .field("blob", FieldDescriptor::new("Bytes")),
        ]
    }

    fn options(output_dir: &Path) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            outputs: OutputPaths::default(),
            runtime: Runtime::Node,
            dry_run: false,
            dump_descriptors: false,
        }
    }

    #[test]
    fn test_writes_default_artifacts() {
        let dir = TempDir::new().unwrap();

        let report = generate(
            "schema.json".to_string(),
            entries(),
            NameOverrideMap::new(),
            options(dir.path()),
        )
        .unwrap();

        assert_eq!(report.classes, ["Post"]);
        assert_eq!(
            report.warnings,
            ["unknown field type 'Bytes', falling back to any\n  --> Post.blob"]
        );
        assert!(dir.path().join(OutputPaths::DEFAULT_ATTRIBUTES).is_file());
        assert!(dir.path().join(OutputPaths::DEFAULT_CLASSES).is_file());
        match report.result {
            GenerationResult::Written { written, unchanged } => {
                assert_eq!(written.len(), 2);
                assert!(unchanged.is_empty());
            }
            other => panic!("expected written result, got {:?}", other),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.dry_run = true;
        opts.outputs = OutputPaths::resolve(&OutputConfig {
            declarations: Some("types/parse-declarations.d.ts".into()),
            ..Default::default()
        });

        let report = generate("schema.json".to_string(), entries(), NameOverrideMap::new(), opts)
            .unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview");
        };
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "types/parse-class-attributes.d.ts",
                "types/parse-declarations.d.ts"
            ]
        );
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_dump_descriptors() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.dump_descriptors = true;
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "AppUser");

        let report = generate("schema.json".to_string(), entries(), overrides, opts).unwrap();

        let GenerationResult::Descriptors(json) = report.result else {
            panic!("expected descriptors");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "AppUser");
        assert_eq!(value[1]["name"], "Post");
    }

    #[test]
    fn test_validation_errors_abort() {
        let dir = TempDir::new().unwrap();
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "Post");

        let err = generate("schema.json".to_string(), entries(), overrides, options(dir.path()))
            .unwrap_err();

        assert!(err.to_string().contains("is generated for both"));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
