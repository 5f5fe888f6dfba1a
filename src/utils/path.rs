//! Lexical path normalization

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically, collapsing `.` and `..` segments without
/// consulting the filesystem.
///
/// Two references to the same file must normalize to the identical path, so
/// this is the canonical form used as a module identifier everywhere.
/// Leading `..` segments that cannot be collapsed are preserved as-is; a
/// path that collapses to nothing becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut stack: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => stack.push(Component::ParentDir),
            },
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return PathBuf::from(".");
    }

    stack.iter().collect()
}
