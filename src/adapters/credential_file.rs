//! JSON credential cache on the local filesystem.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::CredentialStore;

/// Default cache location, relative to `$HOME`.
pub const DEFAULT_CREDENTIAL_PATH: &str = "~/.gist-sweep";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialDocument {
    #[serde(default)]
    oauth_token: Option<String>,
}

/// Token cache stored as `{"oauth_token": "..."}` with owner-only read access.
#[derive(Debug, Clone)]
pub struct JsonCredentialFile {
    path: PathBuf,
}

impl JsonCredentialFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for a user-supplied path, expanding a leading `~`.
    pub fn from_user_path(raw: &str) -> Result<Self, AppError> {
        Ok(Self::new(expand_home(raw)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(unix)]
    fn check_permissions(&self) -> Result<(), AppError> {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(&self.path)?.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            return Err(AppError::InsecureCredentialFile { path: self.path.clone(), mode });
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl CredentialStore for JsonCredentialFile {
    fn load(&self) -> Result<Option<String>, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        self.check_permissions()?;

        let document: CredentialDocument = serde_json::from_str(&contents).map_err(|e| {
            AppError::CredentialFile { path: self.path.clone(), details: e.to_string() }
        })?;

        Ok(document.oauth_token.filter(|token| !token.trim().is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        let body = serde_json::to_string(&CredentialDocument {
            oauth_token: Some(token.to_string()),
        })
        .map_err(|e| AppError::CredentialFile { path: self.path.clone(), details: e.to_string() })?;

        // The complete cache is staged beside the target and renamed over it.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(body.as_bytes())?;
        staged.as_file().sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged.as_file().set_permissions(fs::Permissions::from_mode(0o400))?;
        }
        staged.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), "saved credential cache");
        Ok(())
    }
}

/// Expand a leading `~` against `$HOME`.
pub fn expand_home(raw: &str) -> Result<PathBuf, AppError> {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(raw)),
    };

    let home = std::env::var_os("HOME").filter(|home| !home.is_empty()).ok_or_else(|| {
        AppError::config_error(format!("Cannot expand '{}': HOME is not set", raw))
    })?;

    Ok(PathBuf::from(home).join(rest))
}
