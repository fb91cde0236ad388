//! Class file: runtime subclasses with defaults, constructors and registration.

use std::path::{Path, PathBuf};

use parsegen_codegen::language::TypeMapper;
use parsegen_core::GeneratedFile;
use parsegen_ir::{ClassDescriptor, ConstructorShape};
use parsegen_schema::Runtime;

use super::{GENERATED_HEADER, SDK_NAMESPACE, own_ref};
use crate::{
    TypeScriptTypeMapper,
    ast::{ArrowFn, Class, Constructor, Export, Import, JsObject, Param, StaticProperty},
    code_file::CodeFile,
};

/// The runtime class definitions file.
pub struct ClassesFile<'a> {
    path: &'a Path,
    attributes_module: String,
    runtime: Runtime,
    classes: &'a [ClassDescriptor],
}

impl<'a> ClassesFile<'a> {
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
        let mut imports = vec![Import::new(self.runtime.import_source()).default(SDK_NAMESPACE)];
        if !self.classes.is_empty() {
            imports.push(
                Import::new(&self.attributes_module)
                    .named_all(self.classes.iter().map(|c| c.attributes_interface()))
                    .type_only(),
            );
        }
        imports
    }

    fn constructor(class: &ClassDescriptor) -> Constructor {
        let name = &class.name;
        let partial_attrs = || {
            Param::new("attrs")
                .ty(format!("Partial<{}>", class.attributes_interface()))
                .default("{}")
        };

        match class.constructor {
            ConstructorShape::Account => Constructor::new()
                .param(partial_attrs())
                .body_line(format!("super({{ ...{}.DEFAULT_VALUES, ...attrs }});", name)),
            ConstructorShape::Role => Constructor::new()
                .param(Param::new("ACL").ty("Parse.ACL").default("new Parse.ACL()"))
                .body_line(format!("super(\"{}\", ACL);", name)),
            ConstructorShape::Session => {
                Constructor::new().body_line(format!("super({}.DEFAULT_VALUES);", name))
            }
            ConstructorShape::Generic => Constructor::new().param(partial_attrs()).body_line(
                format!("super(\"{}\", {{ ...{}.DEFAULT_VALUES, ...attrs }});", name, name),
            ),
        }
    }

    fn class(class: &ClassDescriptor) -> Class {
        let mapper = TypeScriptTypeMapper;
        let defaults = JsObject::new().entries(
            class
                .defaults
                .iter()
                .map(|entry| mapper.map_default_entry(entry)),
        );

        Class::new(&class.name)
            .extends(mapper.map_class_ref(&own_ref(class)))
            .member(StaticProperty::new("DEFAULT_VALUES", defaults))
            .member(Self::constructor(class))
    }

    fn register_all(&self) -> ArrowFn {
        self.classes.iter().fold(ArrowFn::new("registerAll"), |f, class| {
            f.body_line(format!(
                "{}.registerSubclass(\"{}\", {});",
                class.base.runtime_name(),
                class.name,
                class.name
            ))
        })
    }
}

impl GeneratedFile for ClassesFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.build_imports())
            .add_all(self.classes.iter().map(Self::class))
            .add(self.register_all())
            .export(Export::new().named_all(self.classes.iter().map(|c| c.name.as_str())))
            .render()
    }
}
