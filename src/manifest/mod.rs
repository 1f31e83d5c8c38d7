use crate::core::{KapError, KapResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The persisted project descriptor (kapack.json)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub dependencies: Vec<String>,
}

fn default_name() -> String {
    "your_project".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            dependencies: Vec::new(),
        }
    }
}

impl Manifest {
    /// Check whether a dependency URL is present
    pub fn has_dependency(&self, url: &str) -> bool {
        self.dependencies.iter().any(|d| d == url)
    }

    /// Validate the manifest
    ///
    /// Invariant: `dependencies` never contains duplicate URLs.
    pub fn validate(&self) -> KapResult<()> {
        let mut seen = HashSet::new();
        for url in &self.dependencies {
            if !seen.insert(url.as_str()) {
                return Err(KapError::CorruptManifest(format!(
                    "duplicate dependency '{}'",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Durable storage for the manifest file
///
/// The path is explicit configuration so tests can run against isolated
/// instances instead of a shared global file.
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest, creating a default one if the file doesn't exist
    pub fn load(&self) -> KapResult<Manifest> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "manifest not found, creating default");
            let manifest = Manifest::default();
            self.save(&manifest)?;
            return Ok(manifest);
        }

        let content = fs::read_to_string(&self.path)?;
        let manifest: Manifest = serde_json::from_str(&content).map_err(|e| {
            KapError::CorruptManifest(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;
        manifest.validate()?;

        Ok(manifest)
    }

    /// Save the manifest, replacing any prior contents
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so a crash mid-write never leaves a truncated manifest.
    pub fn save(&self, manifest: &Manifest) -> KapResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(to_indented_json(manifest)?.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| KapError::Io(e.error))?;

        Ok(())
    }
}

/// Serialize with 4-space indentation, matching the original kapack.json format
fn to_indented_json(manifest: &Manifest) -> KapResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest
        .serialize(&mut serializer)
        .map_err(|e| KapError::Package(format!("Failed to serialize manifest: {}", e)))?;
    String::from_utf8(buf)
        .map_err(|e| KapError::Package(format!("Failed to serialize manifest: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> ManifestStore {
        ManifestStore::new(temp.path().join("kapack.json"))
    }

    #[test]
    fn test_load_creates_default_manifest() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let manifest = store.load().unwrap();
        assert_eq!(manifest.name, "your_project");
        assert_eq!(manifest.version, "1.0.0");
        assert!(manifest.dependencies.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let manifest = Manifest {
            name: "bot".to_string(),
            version: "2.0.0".to_string(),
            dependencies: vec!["https://example.com/org/foo".to_string()],
        };
        store.save(&manifest).unwrap();

        assert_eq!(store.load().unwrap(), manifest);
    }

    #[test]
    fn test_save_load_is_content_noop() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.load().unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        let manifest = store.load().unwrap();
        store.save(&manifest).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_load_tolerates_key_order_and_missing_defaults() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), r#"{"dependencies": [], "name": "bot"}"#).unwrap();

        let manifest = store.load().unwrap();
        assert_eq!(manifest.name, "bot");
        assert_eq!(manifest.version, "1.0.0");
    }

    #[test]
    fn test_load_invalid_json_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(KapError::CorruptManifest(_))));
    }

    #[test]
    fn test_load_wrong_dependencies_type_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), r#"{"dependencies": "not-a-list"}"#).unwrap();

        assert!(matches!(store.load(), Err(KapError::CorruptManifest(_))));
    }

    #[test]
    fn test_load_missing_dependencies_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), r#"{"name": "bot", "version": "1.0.0"}"#).unwrap();

        assert!(matches!(store.load(), Err(KapError::CorruptManifest(_))));
    }

    #[test]
    fn test_load_duplicate_dependencies_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(
            store.path(),
            r#"{"dependencies": ["https://a/r", "https://a/r"]}"#,
        )
        .unwrap();

        assert!(matches!(store.load(), Err(KapError::CorruptManifest(_))));
    }

    #[test]
    fn test_save_uses_four_space_indentation() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&Manifest::default()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("    \"name\""));
    }
}
