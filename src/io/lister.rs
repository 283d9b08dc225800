use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Absolute paths of every non-directory entry below `root`, in traversal order.
/// Symlinks are not followed; a link to a directory is skipped.
pub fn list_all_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = normalize(&std::path::absolute(root)?);
    let mut files = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

/// Lexically drop `.` and resolve `..` against the preceding component.
/// Symlinks are not consulted, so `a/link/..` becomes `a`.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, so `/..` stays `/`
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
