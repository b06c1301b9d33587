use std::path::{Component, Path, PathBuf};

/// Directory part of `file`, the way Go's `filepath.Dir` computes it.
///
/// Everything up to the last separator, lexically cleaned. An empty result
/// (a bare file name, or an in-memory source with no path) becomes `"."`.
pub fn dir_of(file: &str) -> String {
    let path = Path::new(file);
    let parent = match path.parent() {
        Some(parent) => parent,
        // Root or empty path.
        None => path,
    };
    clean(parent).to_string_lossy().into_owned()
}

/// Lexically clean a path: drop `.` segments and fold `..` into the preceding
/// segment where one exists. Never touches the filesystem.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}
