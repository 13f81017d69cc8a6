//! Append-only JSON-lines log of accepted users.

use crate::form::User;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to open export file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write export file: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode user: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// One JSON object per accepted user, appended and flushed immediately.
pub struct UserExport {
    path: PathBuf,
    file: File,
}

impl UserExport {
    /// Opens (creating if needed) the export file in append mode.
    /// Missing parent directories are created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let path = path.into();
        let open_error = |source| ExportError::Open {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_error)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_error)?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, user: &User) -> Result<(), ExportError> {
        let mut line =
            serde_json::to_vec(user).map_err(|source| ExportError::Encode { source })?;
        line.push(b'\n');
        self.file
            .write_all(&line)
            .and_then(|()| self.file.flush())
            .map_err(|source| ExportError::Write { source })
    }
}
