//! Documentation file: JSDoc typedefs for untyped JavaScript sources.

use std::path::{Path, PathBuf};

use parsegen_core::GeneratedFile;
use parsegen_ir::ClassDescriptor;
use parsegen_schema::Runtime;

use super::{GENERATED_HEADER, SDK_NAMESPACE};
use crate::{
    ast::{Import, Typedef},
    code_file::CodeFile,
};

pub struct JsDocFile<'a> {
    path: &'a Path,
    attributes_module: String,
    runtime: Runtime,
    classes: &'a [ClassDescriptor],
}

impl<'a> JsDocFile<'a> {
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

    /// `<Base><Partial<import("<rel>").NAttributes>>`
    fn typedef(&self, module: &str, class: &ClassDescriptor) -> Typedef {
        Typedef::new(
            &class.name,
            format!(
                "{}<Partial<import(\"{}\").{}>>",
                class.base.runtime_name(),
                module,
                class.attributes_interface()
            ),
        )
    }
}

impl GeneratedFile for JsDocFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .header("// @ts-check")
            .import(Import::new(self.runtime.import_source()).default(SDK_NAMESPACE))
            .add_all(
                self.classes
                    .iter()
                    .map(|class| self.typedef(&self.attributes_module, class)),
            )
            .render()
    }
}
