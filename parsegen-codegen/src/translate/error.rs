use thiserror::Error;

/// Translation failure caused by invalid schema input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A Pointer or Relation field has no target class.
    #[error("{kind} field '{class}.{field}' requires a target class")]
    MissingTarget {
        class: String,
        field: String,
        kind: String,
    },
}
