//! Built-in lints.

mod dangling_target;
mod duplicate_class;
mod override_name;

pub use dangling_target::DanglingTargetLint;
pub use duplicate_class::DuplicateClassLint;
pub use override_name::OverrideNameLint;
