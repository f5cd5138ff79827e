//! Grouping of store files by base name

use std::collections::BTreeMap;

/// The part a file plays in a video record, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Video,
    Thumbnail,
    Metadata,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Video, Role::Thumbnail, Role::Metadata];

    /// File extension (without the dot) that selects this role
    pub fn extension(self) -> &'static str {
        match self {
            Role::Video => "mp4",
            Role::Thumbnail => "webp",
            Role::Metadata => "json",
        }
    }

    /// Role for a file name, if its extension is recognized (case-sensitive)
    pub fn of(name: &str) -> Option<Role> {
        let ext = extension(name)?;
        Role::ALL.into_iter().find(|role| role.extension() == ext)
    }
}

/// Name with its final extension stripped; the whole name if it has no dot
pub fn base_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Text after the final dot, if any
pub fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx + 1..])
}

/// Partition file names by base name.
///
/// Every input name lands in exactly one group, including names with no
/// recognized role. Within a group, names keep their input order.
pub fn group<I, S>(entries: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        let entry = entry.into();
        groups
            .entry(base_name(&entry).to_string())
            .or_default()
            .push(entry);
    }
    tracing::debug!("Grouped files into {} base names", groups.len());
    groups
}
