use crate::core::path::{ensure_dir, module_name};
use crate::core::{KapError, KapResult};
use crate::manifest::ManifestStore;
use crate::vcs::VersionControl;
use std::path::PathBuf;

/// Result of an install mutation
#[derive(Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Added to the manifest and cloned
    Installed { module: String },
    /// URL already in the manifest; nothing to do
    AlreadyInstalled,
    /// Added to the manifest; a clone was already on disk (drift repaired)
    AlreadyCloned { module: String },
}

/// Result of an uninstall mutation
#[derive(Debug, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// Removed from the manifest; `had_clone` is whether a directory was deleted
    Removed { module: String, had_clone: bool },
    /// URL not in the manifest; nothing to do
    NotInstalled,
}

/// Applies one dependency mutation, keeping manifest and filesystem in agreement
///
/// The manifest store, the modules root, and the version-control collaborator
/// are all passed in at construction so tests can run isolated instances with
/// a collaborator double.
pub struct ModuleSynchronizer {
    store: ManifestStore,
    modules_dir: PathBuf,
    vcs: Box<dyn VersionControl>,
}

impl ModuleSynchronizer {
    pub fn new(store: ManifestStore, modules_dir: PathBuf, vcs: Box<dyn VersionControl>) -> Self {
        Self {
            store,
            modules_dir,
            vcs,
        }
    }

    /// Install a dependency: record it in the manifest and clone it
    ///
    /// Idempotent: installing an already-installed URL is a no-op success.
    /// If the clone fails the manifest entry is rolled back, so the manifest
    /// never records a dependency with no module on disk.
    pub fn install(&self, url: &str) -> KapResult<InstallOutcome> {
        let mut manifest = self.store.load()?;

        if manifest.has_dependency(url) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        let module = module_name(url)?;
        for existing in &manifest.dependencies {
            if module_name(existing)? == module {
                return Err(KapError::NameCollision(format!(
                    "'{}' and '{}' both map to module directory '{}'",
                    url, existing, module
                )));
            }
        }

        manifest.dependencies.push(url.to_string());
        self.store.save(&manifest)?;

        let target = self.modules_dir.join(&module);
        if target.exists() {
            // Leftover clone from earlier drift; adopt it instead of re-cloning.
            tracing::info!(module = %module, "module directory already present, skipping clone");
            return Ok(InstallOutcome::AlreadyCloned { module });
        }

        ensure_dir(&self.modules_dir)?;
        if let Err(e) = self.vcs.clone_repo(url, &target) {
            // Roll back so the manifest doesn't get ahead of the filesystem.
            tracing::warn!(url = %url, "clone failed, rolling back manifest entry");
            manifest.dependencies.retain(|d| d != url);
            self.store.save(&manifest)?;
            return Err(e);
        }

        Ok(InstallOutcome::Installed { module })
    }

    /// Uninstall a dependency: drop it from the manifest and remove its clone
    ///
    /// Idempotent: uninstalling a URL that isn't installed is a no-op success.
    /// The manifest is persisted before the directory removal; if removal
    /// fails the manifest stays updated (the manifest is the authoritative
    /// intent, a leftover directory is safe drift).
    pub fn uninstall(&self, url: &str) -> KapResult<UninstallOutcome> {
        let mut manifest = self.store.load()?;

        if !manifest.has_dependency(url) {
            return Ok(UninstallOutcome::NotInstalled);
        }

        manifest.dependencies.retain(|d| d != url);
        self.store.save(&manifest)?;

        let module = module_name(url)?;
        let target = self.modules_dir.join(&module);
        if target.exists() {
            self.vcs.remove_tree(&target)?;
            return Ok(UninstallOutcome::Removed {
                module,
                had_clone: true,
            });
        }

        Ok(UninstallOutcome::Removed {
            module,
            had_clone: false,
        })
    }
}
