//! Import path computation between generated files.

use std::path::{Component, Path, PathBuf};

/// Source suffixes removed from import specifiers, longest first.
const SOURCE_EXTENSIONS: &[&str] = &[".d.ts", ".tsx", ".ts", ".jsx", ".js"];

/// Compute the module specifier that `from` must use to import `to`.
///
/// Relative paths are anchored at `base` and made absolute before comparing,
/// so absolute and relative forms can be mixed. The result always starts with
/// `.` and has its declaration/source suffix removed, e.g. importing
/// `types/attrs.d.ts` from `types/classes.ts` yields `./attrs`.
pub fn relative_import_path(base: &Path, from: &Path, to: &Path) -> String {
    let mut from_dir = normalize(&anchor(base, from));
    from_dir.pop();
    let target = normalize(&anchor(base, to));

    let common = from_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n("..".to_string(), from_dir.len() - common));
    segments.extend(target[common..].iter().cloned());

    let joined = strip_source_extension(&segments.join("/")).to_string();
    if joined.starts_with('.') {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Join `path` onto `base` and make it absolute against the working directory.
fn anchor(base: &Path, path: &Path) -> PathBuf {
    let joined = base.join(path);
    std::path::absolute(&joined).unwrap_or(joined)
}

/// Remove a trailing `.d.ts`, `.ts`, `.tsx`, `.js` or `.jsx` suffix.
pub fn strip_source_extension(path: &str) -> &str {
    SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| path.strip_suffix(ext))
        .unwrap_or(path)
}

/// Lexically normalize a path into its textual components.
fn normalize(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            Component::RootDir => parts.push(String::new()),
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
        }
    }
    parts
}
