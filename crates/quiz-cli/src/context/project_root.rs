use std::path::{Path, PathBuf};

use quiz_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.quiz` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::find_project_root;

    #[test]
    fn finds_project_root_in_current_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".quiz")).expect(".quiz should create");

        let found = find_project_root(temp.path());
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".quiz")).expect(".quiz should create");
        std::fs::create_dir_all(temp.path().join("a/b/c")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a/b/c"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn a_plain_file_named_quiz_does_not_count() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::write(temp.path().join(".quiz"), "").expect("file should write");
        std::fs::create_dir_all(temp.path().join("a")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a"));
        assert_ne!(found.as_deref(), Some(temp.path()));
    }
}
