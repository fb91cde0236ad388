//! Integration tests for writing artifacts to disk.

use std::fs;

use parsegen_codegen::pipeline::Pipeline;
use parsegen_codegen_typescript::{Generator, LanguageCodegen, OutputPaths};
use parsegen_schema::{FieldDescriptor, FieldKind, NameOverrideMap, Runtime, SchemaEntry};
use tempfile::TempDir;

fn generator() -> Generator {
    generator_with(OutputPaths::default())
}

fn generator_with(outputs: OutputPaths) -> Generator {
    let entries = vec![
        SchemaEntry::new("Post")
            .field("title", FieldDescriptor::new(FieldKind::String).required()),
    ];
    let ctx = Pipeline::new()
        .run(entries, NameOverrideMap::new())
        .expect("Pipeline failed");
    Generator::from_context(ctx, outputs, Runtime::Node)
}

#[test]
fn test_generate_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = generator().generate(temp_dir.path()).expect("generate failed");

    assert_eq!(result.written.len(), 2);
    assert!(result.unchanged.is_empty());

    let classes = fs::read_to_string(temp_dir.path().join("types/parse-classes.ts")).unwrap();
    assert!(classes.contains("class Post extends Parse.Object<PostAttributes> {"));
    assert!(temp_dir.path().join("types/parse-class-attributes.d.ts").exists());
}

#[test]
fn test_second_run_leaves_files_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = generator();

    generator.generate(temp_dir.path()).expect("first run failed");
    let result = generator.generate(temp_dir.path()).expect("second run failed");

    assert!(result.written.is_empty());
    assert_eq!(result.unchanged.len(), 2);
}

#[test]
fn test_stale_artifact_is_rewritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = generator();
    let classes_path = temp_dir.path().join("types/parse-classes.ts");

    generator.generate(temp_dir.path()).expect("first run failed");
    fs::write(&classes_path, "// edited by hand\n").unwrap();
    let result = generator.generate(temp_dir.path()).expect("second run failed");

    assert_eq!(result.written, [classes_path.display().to_string()]);
    assert_eq!(result.unchanged.len(), 1);
    assert!(
        fs::read_to_string(&classes_path)
            .unwrap()
            .starts_with("// Generated by parsegen. Do not edit.")
    );
}

#[test]
fn test_absolute_attributes_path_imported_relative_to_written_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let outputs = OutputPaths {
        attributes: temp_dir.path().join("shared/attrs.d.ts"),
        classes: Some("types/parse-classes.ts".into()),
        declarations: None,
        jsdoc: None,
    };

    let result = generator_with(outputs)
        .generate(temp_dir.path())
        .expect("generate failed");

    assert_eq!(result.written.len(), 2);
    assert!(temp_dir.path().join("shared/attrs.d.ts").exists());
    let classes = fs::read_to_string(temp_dir.path().join("types/parse-classes.ts")).unwrap();
    assert!(classes.contains(r#"import type { PostAttributes } from "../shared/attrs";"#));
}
