use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path, joined onto the output base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfChanged => {
            if is_unchanged(path, content) {
                Ok(WriteResult::Unchanged)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn is_unchanged(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content and was left untouched
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules for this file.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for generated artifacts: rewrite only when the content differs.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }

    /// Rules for starter files that must never clobber user edits.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Overwrite unless the file already holds the exact content
    IfChanged,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::if_changed()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types").join("nested").join("attrs.d.ts");

        write_file(&path, "export {};").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("classes.ts");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_rewrites_stale() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("classes.ts");
        fs::write(&path, "stale").unwrap();

        let result = File::new(&path, "fresh").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("classes.ts");
        fs::write(&path, "same").unwrap();

        let file = File::new(&path, "same").with_rules(FileRules {
            overwrite: Overwrite::Always,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Written);
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("parsegen.toml");
        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "replacement").with_rules(FileRules::create_once());
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_joins_base() {
        struct Stub;

        impl GeneratedFile for Stub {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("out").join("stub.ts")
            }

            fn render(&self) -> String {
                "// stub\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Stub.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Stub.write(temp.path()).unwrap(), WriteResult::Unchanged);
        assert_eq!(
            fs::read_to_string(temp.path().join("out/stub.ts")).unwrap(),
            "// stub\n"
        );
    }
}
