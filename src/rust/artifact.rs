//! Pipeline artifacts on disk.
//!
//! An artifact is the bincode encoding of a [`Pipeline`]. Next to it a
//! `<file>.sha256` sidecar holds the hex SHA-256 of the artifact bytes;
//! loading checks the digest whenever the sidecar is present.

use std::path::{Path, PathBuf};
use std::fs;
use std::io;
use sha2::{Sha256, Digest};

use crate::classifier::Pipeline;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] bincode::Error),
    #[error("Hash mismatch: expected {expected}, got {actual} for {path}")]
    HashMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

/// Path of the digest sidecar for an artifact
pub fn checksum_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".sha256");
    PathBuf::from(name)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Serializes a pipeline to `path` and writes its digest sidecar
pub fn save<P: AsRef<Path>>(pipeline: &Pipeline, path: P) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    let bytes = bincode::serialize(pipeline)?;
    let hash = sha256_hex(&bytes);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    log::info!("Writing {} bytes to {:?}", bytes.len(), path);
    fs::write(path, &bytes)?;
    fs::write(checksum_path(path), &hash)?;
    log::debug!("Artifact hash: {}", hash);
    Ok(())
}

/// Reads a pipeline from `path`, checking the digest sidecar when present
pub fn load<P: AsRef<Path>>(path: P) -> Result<Pipeline, ArtifactError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    log::info!("Read {} bytes from {:?}", bytes.len(), path);

    let sidecar = checksum_path(path);
    if sidecar.exists() {
        let expected = fs::read_to_string(&sidecar)?.trim().to_string();
        let actual = sha256_hex(&bytes);
        if actual != expected {
            log::error!("Artifact hash mismatch: expected {}, got {}", expected, actual);
            return Err(ArtifactError::HashMismatch {
                path: path.display().to_string(),
                expected,
                actual,
            });
        }
        log::info!("Artifact hash verified");
    } else {
        log::warn!("No checksum found for {:?}, skipping verification", path);
    }

    Ok(bincode::deserialize(&bytes)?)
}

/// Returns true when the artifact exists and matches its recorded digest
pub fn verify<P: AsRef<Path>>(path: P) -> Result<bool, ArtifactError> {
    let path = path.as_ref();
    let sidecar = checksum_path(path);
    if !path.exists() || !sidecar.exists() {
        log::info!("Artifact or checksum missing for {:?}", path);
        return Ok(false);
    }
    let bytes = fs::read(path)?;
    let expected = fs::read_to_string(&sidecar)?;
    Ok(sha256_hex(&bytes) == expected.trim())
}

/// Deletes an artifact and its sidecar if they exist
pub fn remove<P: AsRef<Path>>(path: P) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }
    let sidecar = checksum_path(path);
    if sidecar.exists() {
        fs::remove_file(sidecar)?;
    }
    Ok(())
}
