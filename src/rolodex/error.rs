use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("A customer named '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Invalid phone number: '{0}' (digits only)")]
    InvalidPhone(String),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("No store at {}", .0.display())]
    StorageMissing(PathBuf),

    #[error("Store at {} is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write store at {}: {source}", path.display())]
    StorageWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
