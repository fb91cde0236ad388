//! Declarations file: interface merges only, for consumers that need typing
//! without subclass registration.

use std::path::{Path, PathBuf};

use parsegen_codegen::language::TypeMapper;
use parsegen_core::GeneratedFile;
use parsegen_ir::ClassDescriptor;
use parsegen_schema::Runtime;

use super::{GENERATED_HEADER, SDK_NAMESPACE, own_ref};
use crate::{
    TypeScriptTypeMapper,
    ast::{Import, Interface},
    code_file::CodeFile,
};

pub struct DeclarationsFile<'a> {
    path: &'a Path,
    attributes_module: String,
    runtime: Runtime,
    classes: &'a [ClassDescriptor],
}

impl<'a> DeclarationsFile<'a> {
    pub fn new(
        path: &'a Path,
        attributes_module: String,
        runtime: Runtime,
        classes: &'a [ClassDescriptor],
    ) -> Self {
        Self {
            path,
            attributes_module,
            runtime,
            classes,
        }
    }

    fn build_imports(&self) -> Vec<Import> {
        let mut imports = vec![
            Import::new(self.runtime.import_source())
                .default(SDK_NAMESPACE)
                .type_only(),
        ];
        if !self.classes.is_empty() {
            imports.push(
                Import::new(&self.attributes_module)
                    .named_all(self.classes.iter().map(|c| c.attributes_interface()))
                    .type_only(),
            );
        }
        imports
    }
}

impl GeneratedFile for DeclarationsFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        let mapper = TypeScriptTypeMapper;
        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.build_imports())
            .add_all(
                self.classes
                    .iter()
                    .map(|class| Interface::new(&class.name).extends(mapper.map_class_ref(&own_ref(class)))),
            )
            .render()
    }
}
