//! Direct file-system access for the editor.
//!
//! Stateless helpers over the real file system: list a directory's entry
//! names, read a whole file into a string, write a whole buffer back out.
//! No state is retained between calls; every failure is reported as an
//! [`FsError`] at the call site and left for the caller to log.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced by file-system operations.
///
/// Two kinds only: a missing folder on [`list_entries`], and everything
/// else: read/write failures, reading a directory as a file, saving over
/// something that is not an existing regular file.
#[derive(Debug, Error)]
pub enum FsError {
    /// The requested directory does not exist.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// A read or write failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn invalid(path: &Path, message: &str) -> Self {
        Self::io(path, io::Error::new(io::ErrorKind::InvalidInput, message))
    }
}

/// List the entry names of a directory, in file-system enumeration order.
///
/// Names only, no recursion, no metadata. The listing is rebuilt from
/// scratch on every call.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] when the directory does not exist, and
/// [`FsError::Io`] for any other enumeration failure.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound(dir.to_path_buf()));
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| FsError::io(dir, err))? {
        let entry = entry.map_err(|err| FsError::io(dir, err))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Read an entire file into a string.
///
/// # Errors
///
/// Returns [`FsError::Io`] when the path does not exist, is a directory,
/// or the read fails.
pub fn read_file(path: &Path) -> Result<String, FsError> {
    if path.is_dir() {
        return Err(FsError::invalid(path, "is a directory, not a file"));
    }
    fs::read_to_string(path).map_err(|err| FsError::io(path, err))
}

/// Overwrite the full contents of an existing regular file.
///
/// Plain save never creates a file; creating one is the save-as path,
/// [`write_file_create`].
///
/// # Errors
///
/// Returns [`FsError::Io`] when `path` is not an existing regular file or
/// the write fails.
pub fn write_file(path: &Path, text: &str) -> Result<(), FsError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(FsError::invalid(path, "not a regular file")),
        Err(err) => return Err(FsError::io(path, err)),
    }
    fs::write(path, text).map_err(|err| FsError::io(path, err))
}

/// Write the full contents to a file, creating it if needed.
///
/// # Errors
///
/// Returns [`FsError::Io`] when the write fails or `path` points at an
/// existing directory.
pub fn write_file_create(path: &Path, text: &str) -> Result<(), FsError> {
    if path.is_dir() {
        return Err(FsError::invalid(path, "is a directory, not a file"));
    }
    fs::write(path, text).map_err(|err| FsError::io(path, err))
}
