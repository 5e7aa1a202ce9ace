/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Persisted credentials
//!
//! The client never touches storage directly; it goes through a
//! [`CredentialStore`] injected at construction. Tokens are read before every
//! request, written after login and after every successful refresh, and
//! cleared together when the session cannot be recovered.

use crate::error::AppError;
use crate::model::auth::StoredCredentials;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use tracing::debug;

/// Storage for the `access`, `refresh` and `user_data` entries
pub trait CredentialStore: Send + Sync {
    /// Current entries; an empty value when nothing is stored
    fn read(&self) -> Result<StoredCredentials, AppError>;

    /// Replaces every entry
    fn write(&self, credentials: &StoredCredentials) -> Result<(), AppError>;

    /// Removes every entry
    fn clear(&self) -> Result<(), AppError>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<StoredCredentials>,
}

impl MemoryCredentialStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `credentials`
    #[must_use]
    pub fn with_credentials(credentials: StoredCredentials) -> Self {
        Self {
            inner: RwLock::new(credentials),
        }
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("credential store lock poisoned".to_string())
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> Result<StoredCredentials, AppError> {
        Ok(self.inner.read().map_err(poisoned)?.clone())
    }

    fn write(&self, credentials: &StoredCredentials) -> Result<(), AppError> {
        *self.inner.write().map_err(poisoned)? = credentials.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.inner.write().map_err(poisoned)? = StoredCredentials::default();
        Ok(())
    }
}

/// Store backed by a JSON file
///
/// A missing file reads as empty and `clear` deletes the file. Writes go to a
/// sibling temporary file first and are renamed into place.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Store persisting to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the credentials file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CredentialStore for FileCredentialStore {
    fn read(&self) -> Result<StoredCredentials, AppError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                Ok(StoredCredentials::default())
            }
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoredCredentials::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, credentials: &StoredCredentials) -> Result<(), AppError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(credentials)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Credentials written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Credentials removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
