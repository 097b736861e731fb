use pathdiff::diff_paths;
use std::path::{Component, Path};

/// Maps a file path into its workspace-relative identifier: relative to
/// `root`, with `/` separators regardless of the host convention.
///
/// Returns `None` when the path is not contained in the root; callers treat
/// that as a skip, not a failure. The root itself maps to `Some("")`, which
/// is still "contained".
pub fn workspace_relative(root: &Path, path: &Path) -> Option<String> {
    let relative = diff_paths(path, root)?;

    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn maps_nested_file_with_forward_slashes() {
        let root = PathBuf::from("/home/me/project");
        let file = root.join("src").join("lib.rs");
        assert_eq!(
            workspace_relative(&root, &file),
            Some("src/lib.rs".to_string())
        );
    }

    #[test]
    fn path_outside_the_root_has_no_mapping() {
        let root = Path::new("/home/me/project");
        let outside = Path::new("/home/me/elsewhere/notes.txt");
        assert_eq!(workspace_relative(root, outside), None);
    }

    #[test]
    fn the_root_itself_maps_to_the_empty_path() {
        let root = Path::new("/home/me/project");
        assert_eq!(workspace_relative(root, root), Some(String::new()));
    }

    #[test]
    fn sibling_with_shared_prefix_is_not_contained() {
        let root = Path::new("/home/me/project");
        let sibling = Path::new("/home/me/project-backup/a.ts");
        assert_eq!(workspace_relative(root, sibling), None);
    }

    #[test]
    fn is_deterministic() {
        let root = Path::new("/ws");
        let file = Path::new("/ws/a/b.ts");
        assert_eq!(
            workspace_relative(root, file),
            workspace_relative(root, file)
        );
    }
}
