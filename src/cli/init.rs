use kapack::core::path::{ensure_dir, kakao_modules_dir, kapack_file};
use kapack::core::{KapError, KapResult};
use kapack::manifest::ManifestStore;
use std::env;

pub fn run() -> KapResult<()> {
    let current_dir = env::current_dir()
        .map_err(|e| KapError::Path(format!("Failed to get current directory: {}", e)))?;

    let manifest_path = kapack_file(&current_dir);
    if manifest_path.exists() {
        println!("kapack.json already exists. Nothing to do.");
        return Ok(());
    }

    // load() synthesizes and persists the default manifest.
    let store = ManifestStore::new(manifest_path);
    store.load()?;
    ensure_dir(&kakao_modules_dir(&current_dir))?;

    println!("✓ Created kapack.json");
    println!("✓ Created kakao_modules/");

    Ok(())
}
