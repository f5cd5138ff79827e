//! Directory scanner - lists the file names in the media store

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DirectoryError;

/// A source of file names for the grouping engine
pub trait DirectorySource {
    /// List the file names currently present, sorted lexicographically
    fn list(&self) -> Result<Vec<String>, DirectoryError>;
}

/// Directory source backed by the local filesystem
#[derive(Debug, Clone)]
pub struct FsDirectory {
    path: Option<PathBuf>,
}

impl FsDirectory {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl DirectorySource for FsDirectory {
    fn list(&self) -> Result<Vec<String>, DirectoryError> {
        match self.path.as_deref() {
            Some(path) => list_directory(path),
            None => Err(DirectoryError::invalid(None)),
        }
    }
}

/// In-memory directory source, used when the names are already known
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    names: Vec<String>,
}

#[cfg(test)]
impl StaticDirectory {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl DirectorySource for StaticDirectory {
    fn list(&self) -> Result<Vec<String>, DirectoryError> {
        let mut names = self.names.clone();
        names.sort();
        Ok(names)
    }
}

/// List the regular files directly inside `path`.
///
/// Nested directories are excluded; symlinks count when they resolve to a
/// regular file. Entries whose type cannot be determined or whose name is
/// not UTF-8 are skipped with a warning. The result is sorted by name.
pub fn list_directory(path: &Path) -> Result<Vec<String>, DirectoryError> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(DirectoryError::invalid(Some(path.to_path_buf())));
    }

    let entries = fs::read_dir(path).map_err(|source| DirectoryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", path, e);
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::warn!("Skipping {:?}: cannot read file type: {}", entry.path(), e);
                continue;
            }
        };

        let is_file = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_file(),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: cannot resolve symlink: {}", entry.path(), e);
                    continue;
                }
            }
        } else {
            file_type.is_file()
        };

        if !is_file {
            tracing::trace!("Skipping non-file entry {:?}", entry.path());
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name {:?} in {:?}", raw, path);
            }
        }
    }

    names.sort();
    tracing::debug!("Listed {} files in {:?}", names.len(), path);
    Ok(names)
}
