//! KaPack - a simple package manager for KakaoTalk bot modules
//!
//! This crate provides the KaPack library: a JSON manifest store
//! (`kapack.json`), a module synchronizer that keeps the manifest and the
//! `kakao_modules/` directory of cloned repositories in agreement, and a
//! git collaborator used to clone and remove module repositories.

// Core functionality
pub mod core;

// Manifest store (kapack.json)
pub mod manifest;

// Manifest/filesystem synchronization
pub mod sync;

// Version-control collaborator
pub mod vcs;

// Re-export commonly used types
pub use core::{format_error_with_help, ErrorHelp, KapError, KapResult};
pub use manifest::{Manifest, ManifestStore};
pub use sync::{InstallOutcome, ModuleSynchronizer, UninstallOutcome};
pub use vcs::{GitClient, VersionControl};
