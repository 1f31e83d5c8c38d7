use kapack::core::path::{find_project_root, kakao_modules_dir, kapack_file};
use kapack::core::{KapError, KapResult};
use kapack::manifest::ManifestStore;
use kapack::sync::{ModuleSynchronizer, UninstallOutcome};
use kapack::vcs::GitClient;
use std::env;

pub fn run(url: String) -> KapResult<()> {
    let current_dir = env::current_dir()
        .map_err(|e| KapError::Path(format!("Failed to get current directory: {}", e)))?;
    let project_root = find_project_root(&current_dir);

    println!("Removing package: {}...", url);

    let store = ManifestStore::new(kapack_file(&project_root));
    let sync = ModuleSynchronizer::new(
        store,
        kakao_modules_dir(&project_root),
        Box::new(GitClient::new()),
    );

    match sync.uninstall(&url)? {
        UninstallOutcome::Removed { module, had_clone } => {
            println!("✓ Removed {} from kapack.json", url);
            if had_clone {
                println!("✓ Removed cloned repository: kakao_modules/{}", module);
            } else {
                println!("No cloned repository found for {}.", url);
            }
        }
        UninstallOutcome::NotInstalled => {
            println!("{} is not installed.", url);
        }
    }

    Ok(())
}
