//! Attributes file: one interface per class plus the serializable helper types.

use std::path::{Path, PathBuf};

use parsegen_codegen::language::TypeMapper;
use parsegen_core::GeneratedFile;
use parsegen_ir::ClassDescriptor;
use parsegen_schema::Runtime;

use super::{GENERATED_HEADER, SDK_NAMESPACE};
use crate::{
    TypeScriptTypeMapper,
    ast::{Import, Interface, TypeAlias},
    code_file::CodeFile,
};

/// The attributes file every other artifact imports from.
pub struct AttributesFile<'a> {
    path: &'a Path,
    runtime: Runtime,
    classes: &'a [ClassDescriptor],
}

impl<'a> AttributesFile<'a> {
    pub fn new(path: &'a Path, runtime: Runtime, classes: &'a [ClassDescriptor]) -> Self {
        Self {
            path,
            runtime,
            classes,
        }
    }

    fn helper_types() -> Vec<TypeAlias> {
        vec![
            TypeAlias::union(
                "Primitive",
                [
                    "undefined", "null", "boolean", "number", "symbol", "string", "Date",
                ],
            ),
            TypeAlias::new(
                "Serializable",
                "Primitive | SerializableObject | SerializableArray",
            ),
            TypeAlias::new("SerializableArray", "ReadonlyArray<Serializable>"),
            TypeAlias::new(
                "SerializableObject",
                "Readonly<{ [key: string]: Serializable }>",
            ),
        ]
    }

    fn interface(class: &ClassDescriptor) -> Interface {
        let mapper = TypeScriptTypeMapper;
        Interface::new(class.attributes_interface()).members(
            class
                .attributes
                .iter()
                .map(|attribute| mapper.map_attribute(attribute)),
        )
    }
}

impl GeneratedFile for AttributesFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(
                Import::new(self.runtime.import_source())
                    .default(SDK_NAMESPACE)
                    .type_only(),
            )
            .add_all(Self::helper_types())
            .add_all(self.classes.iter().map(Self::interface))
            .render()
    }
}
