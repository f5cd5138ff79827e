//! Video query - list, group and assemble in one pass

use crate::error::QueryError;

use super::grouping::group;
use super::record::{assemble_all, VideoRecord};
use super::scanner::DirectorySource;

/// Read-only catalog over a directory source.
///
/// Holds no cached state; every call re-lists the source.
#[derive(Debug, Clone)]
pub struct VideoCatalog<S> {
    source: S,
}

impl<S: DirectorySource> VideoCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build one record per base name, ordered by `id`.
    ///
    /// An invalid or unreadable directory is `QueryError::BadRequest`; a
    /// valid empty directory is an empty list.
    pub fn get_videos(&self) -> Result<Vec<VideoRecord>, QueryError> {
        let entries = self.source.list()?;
        let groups = group(entries);
        let records = assemble_all(&groups);
        tracing::debug!("Assembled {} video records", records.len());
        Ok(records)
    }
}
