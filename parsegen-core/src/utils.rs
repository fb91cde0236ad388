//! Identifier checks shared by validation and rendering.

/// TypeScript reserved words that cannot name a class or interface.
pub(crate) const TS_RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode and type-level names
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield", "any", "boolean", "number", "string", "symbol", "never", "unknown", "object",
];

/// Check if a name is a TypeScript reserved word
pub(crate) fn is_reserved_word(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Whether `name` can appear unquoted as an object or interface key.
///
/// Reserved words are accepted here since TypeScript allows them as
/// property names.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Validate that a name can be declared as a TypeScript class.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_reserved_word(name) {
        return Some("name is a TypeScript reserved word");
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, numbers, underscores and dollar signs");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Post").is_none());
        assert!(validate_identifier("AppUser").is_none());
        assert!(validate_identifier("_Internal").is_none());
        assert!(validate_identifier("$Store").is_none());
        assert!(validate_identifier("Post2").is_none());
    }

    #[test]
    fn test_reserved_words() {
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("default").is_some());
        assert!(validate_identifier("interface").is_some());
        assert!(validate_identifier("string").is_some());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("-name").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_identifier("My-User").is_some());
        assert!(validate_identifier("my user").is_some());
        assert!(validate_identifier("name@test").is_some());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_identifier("").is_some());
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("title"));
        assert!(is_valid_identifier("default"));
        assert!(is_valid_identifier("_rperm"));
        assert!(!is_valid_identifier("first-name"));
        assert!(!is_valid_identifier("2fa"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("new"));
        assert!(!is_reserved_word("Post"));
    }
}
