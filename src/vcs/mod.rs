use crate::core::{KapError, KapResult};
use std::fs;
use std::path::Path;
use std::process::Command;

/// External version-control capability used by the synchronizer
///
/// Modeled as an injected trait so tests can simulate clone/remove outcomes
/// without touching real version control.
pub trait VersionControl {
    /// Clone a repository into the destination directory
    fn clone_repo(&self, url: &str, dest: &Path) -> KapResult<()>;

    /// Recursively remove a module directory
    fn remove_tree(&self, path: &Path) -> KapResult<()>;
}

/// Version control backed by the system git binary
#[derive(Debug, Default)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        Self
    }
}

impl VersionControl for GitClient {
    fn clone_repo(&self, url: &str, dest: &Path) -> KapResult<()> {
        let git = which::which("git")
            .map_err(|_| KapError::CloneFailed("git executable not found in PATH".to_string()))?;

        tracing::debug!(url = %url, dest = %dest.display(), "running git clone");
        let output = Command::new(git)
            .arg("clone")
            .arg(url)
            .arg(dest)
            .output()
            .map_err(|e| KapError::CloneFailed(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KapError::CloneFailed(format!(
                "git clone failed for {}: {}",
                url,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn remove_tree(&self, path: &Path) -> KapResult<()> {
        fs::remove_dir_all(path).map_err(|e| {
            KapError::RemovalFailed(format!("could not remove {}: {}", path.display(), e))
        })
    }
}
