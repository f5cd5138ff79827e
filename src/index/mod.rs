//! Media store indexing
//!
//! This module turns a flat directory of assets into video records:
//! - Directory listing (regular files only, sorted by name)
//! - Grouping by base name
//! - Role selection by extension (`.mp4`, `.webp`, `.json`)
//! - The video query that runs the whole pipeline

pub mod grouping;
pub mod query;
pub mod record;
pub mod scanner;

pub use query::VideoCatalog;
pub use record::VideoRecord;
pub use scanner::FsDirectory;
