//! The four generated artifacts.

use parsegen_ir::{ClassDescriptor, ClassRef};

mod attributes;
mod classes;
mod declarations;
mod jsdoc;

pub use attributes::AttributesFile;
pub use classes::ClassesFile;
pub use declarations::DeclarationsFile;
pub use jsdoc::JsDocFile;

/// First line of every artifact.
pub const GENERATED_HEADER: &str = "// Generated by parsegen. Do not edit.";

/// Name under which the SDK's default export is imported.
const SDK_NAMESPACE: &str = "Parse";

/// The class a descriptor declares, parameterized by its own attributes interface.
fn own_ref(class: &ClassDescriptor) -> ClassRef {
    ClassRef::parameterized(class.base, class.attributes_interface())
}
