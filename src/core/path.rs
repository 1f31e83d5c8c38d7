use crate::core::error::{KapError, KapResult};
use std::path::{Path, PathBuf};

/// Manifest file name
pub const KAPACK_FILE: &str = "kapack.json";

/// Modules directory name
pub const KAKAO_MODULES_DIR: &str = "kakao_modules";

/// Get the manifest file path for a project (./kapack.json)
pub fn kapack_file(project_root: &Path) -> PathBuf {
    project_root.join(KAPACK_FILE)
}

/// Get the modules directory for a project (./kakao_modules)
pub fn kakao_modules_dir(project_root: &Path) -> PathBuf {
    project_root.join(KAKAO_MODULES_DIR)
}

/// Find the project root by looking for kapack.json
///
/// Walks up from `start`. If no kapack.json is found in any parent, `start`
/// itself is returned: install/uninstall create the manifest there.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();

    loop {
        if current.join(KAPACK_FILE).exists() {
            return current;
        }

        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            return start.to_path_buf();
        }
    }
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> KapResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Derive a module name from a repository URL
///
/// The name is the last path segment with trailing slashes ignored and a
/// `.git` suffix stripped (e.g. https://github.com/user/repo.git -> repo).
pub fn module_name(url: &str) -> KapResult<String> {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() {
        return Err(KapError::Path(format!(
            "Could not derive a module name from '{}'",
            url
        )));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_module_name_plain() {
        assert_eq!(module_name("https://github.com/user/repo").unwrap(), "repo");
    }

    #[test]
    fn test_module_name_git_suffix() {
        assert_eq!(
            module_name("https://github.com/user/repo.git").unwrap(),
            "repo"
        );
    }

    #[test]
    fn test_module_name_trailing_slash() {
        assert_eq!(
            module_name("https://github.com/user/repo/").unwrap(),
            "repo"
        );
        assert_eq!(
            module_name("https://github.com/user/repo.git///").unwrap(),
            "repo"
        );
    }

    #[test]
    fn test_module_name_empty_is_error() {
        assert!(module_name("").is_err());
        assert!(module_name("///").is_err());
    }

    #[test]
    fn test_find_project_root() {
        let temp = TempDir::new().unwrap();
        let project_dir = temp.path().join("project");
        let sub_dir = project_dir.join("subdir");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(KAPACK_FILE), "{}").unwrap();

        assert_eq!(find_project_root(&sub_dir), project_dir);
    }

    #[test]
    fn test_find_project_root_falls_back_to_start() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(find_project_root(&dir), dir);
    }

    #[test]
    fn test_ensure_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("test_dir");

        ensure_dir(&dir).unwrap();
        assert!(dir.exists());
        assert!(dir.is_dir());
    }
}
