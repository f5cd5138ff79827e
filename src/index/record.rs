//! Video record assembly

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::grouping::Role;

/// One logical video: the files sharing a base name, by role.
/// A role with no matching file is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub video: String,
    pub thumbnail: String,
    pub metadata: String,
}

/// First entry in `entries` whose extension selects `role`, or `""`
fn select(entries: &[String], role: Role) -> String {
    entries
        .iter()
        .find(|name| Role::of(name) == Some(role))
        .cloned()
        .unwrap_or_default()
}

/// Build the record for one group
pub fn assemble(id: &str, entries: &[String]) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        video: select(entries, Role::Video),
        thumbnail: select(entries, Role::Thumbnail),
        metadata: select(entries, Role::Metadata),
    }
}

/// Build one record per group, in group key order
pub fn assemble_all(groups: &BTreeMap<String, Vec<String>>) -> Vec<VideoRecord> {
    groups
        .iter()
        .map(|(id, entries)| assemble(id, entries))
        .collect()
}
