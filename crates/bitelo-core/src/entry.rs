use crate::error::{BiteloError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independently mountable views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Header,
    Heading,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Header => "Header",
            EntryKind::Heading => "Heading",
        }
    }

    pub fn default_mount_id(&self) -> &'static str {
        match self {
            EntryKind::Header => "root",
            EntryKind::Heading => "heading-root",
        }
    }

    pub fn all() -> &'static [EntryKind] {
        &[EntryKind::Header, EntryKind::Heading]
    }
}

/// Id of the DOM element an entry mounts into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn parse(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(BiteloError::Config("mount id is empty".to_string()));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(BiteloError::Config(format!(
                "mount id contains whitespace: {id:?}"
            )));
        }
        Ok(Self(id.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mount_ids_are_distinct() {
        assert_ne!(
            EntryKind::Header.default_mount_id(),
            EntryKind::Heading.default_mount_id()
        );
        for kind in EntryKind::all() {
            assert!(MountTarget::parse(kind.default_mount_id()).is_ok());
        }
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert!(matches!(MountTarget::parse(""), Err(BiteloError::Config(_))));
        assert!(matches!(
            MountTarget::parse("my root"),
            Err(BiteloError::Config(_))
        ));
        assert!(matches!(
            MountTarget::parse("\troot"),
            Err(BiteloError::Config(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(EntryKind::Header.label(), "Header");
        assert_eq!(EntryKind::Heading.label(), "Heading");
    }

    #[test]
    fn test_display() {
        let target = MountTarget::parse("root").unwrap();
        assert_eq!(target.id(), "root");
        assert_eq!(target.to_string(), "#root");
    }
}
