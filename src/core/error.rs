use thiserror::Error;

pub type KapResult<T> = Result<T, KapError>;

#[derive(Error, Debug)]
pub enum KapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt manifest: {0}")]
    CorruptManifest(String),

    #[error("Name collision: {0}")]
    NameCollision(String),

    #[error("Clone failed: {0}")]
    CloneFailed(String),

    #[error("Removal failed: {0}")]
    RemovalFailed(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Package error: {0}")]
    Package(String),
}
