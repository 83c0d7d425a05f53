use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `base` and drop `.`/`..` components without
/// touching the filesystem.
pub fn normalize_against(
    base: &Path,
    path: &Path,
) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Absolute, lexically normalized form of `path` relative to the current
/// directory.
pub fn absolute(path: &Path) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    normalize_against(&cwd, path)
}

/// Number of leading components two paths share.
pub fn shared_prefix_len(
    a: &Path,
    b: &Path,
) -> usize {
    a.components().zip(b.components()).take_while(|(x, y)| x == y).count()
}

pub fn is_header(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("h" | "hh" | "hpp" | "hxx" | "h++" | "inl" | "inc" | "ipp" | "tcc")
    )
}

pub fn is_c_source(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("c"))
}

#[cfg(test)]
#[path = "../../tests/src/compilation_db/paths_tests.rs"]
mod tests;
