use kapack::core::path::{find_project_root, kakao_modules_dir, kapack_file};
use kapack::core::{KapError, KapResult};
use kapack::manifest::ManifestStore;
use kapack::sync::{InstallOutcome, ModuleSynchronizer};
use kapack::vcs::GitClient;
use std::env;

pub fn run(url: String) -> KapResult<()> {
    let current_dir = env::current_dir()
        .map_err(|e| KapError::Path(format!("Failed to get current directory: {}", e)))?;
    let project_root = find_project_root(&current_dir);

    println!("Installing package from {}...", url);

    let store = ManifestStore::new(kapack_file(&project_root));
    let sync = ModuleSynchronizer::new(
        store,
        kakao_modules_dir(&project_root),
        Box::new(GitClient::new()),
    );

    match sync.install(&url)? {
        InstallOutcome::Installed { module } => {
            println!("✓ Added {} to kapack.json", url);
            println!("✓ Cloned {} into kakao_modules/", module);
        }
        InstallOutcome::AlreadyInstalled => {
            println!("{} is already installed.", url);
        }
        InstallOutcome::AlreadyCloned { module } => {
            println!("✓ Added {} to kapack.json", url);
            println!("Repository {} is already cloned.", module);
        }
    }

    Ok(())
}
