use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The fixed classification of a journal entry. The category decides which of
/// a person's journal lists the entry is appended to and how entries are
/// grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Service,
    Medical,
    Award,
    Personal,
    Performance,
    Patient,
    Assignment,
    Historical,
    Custom,
}

/// The journal lists a person actually owns. Several categories share the
/// main service journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalKind {
    Service,
    Medical,
    Performance,
    Patient,
    Assignment,
    Personal,
}

impl Category {
    /// The journal list entries of this category are appended to.
    /// Awards, imported history, and custom entries all live in the main
    /// service journal.
    pub fn journal_kind(self) -> JournalKind {
        match self {
            Category::Service | Category::Award | Category::Historical | Category::Custom => {
                JournalKind::Service
            }
            Category::Medical => JournalKind::Medical,
            Category::Performance => JournalKind::Performance,
            Category::Patient => JournalKind::Patient,
            Category::Assignment => JournalKind::Assignment,
            Category::Personal => JournalKind::Personal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Medical => "medical",
            Category::Award => "award",
            Category::Personal => "personal",
            Category::Performance => "performance",
            Category::Patient => "patient",
            Category::Assignment => "assignment",
            Category::Historical => "historical",
            Category::Custom => "custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts both the current kebab-case names and the upper-case constant
    /// names found in older save files.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let category = match source.to_ascii_lowercase().as_str() {
            "service" => Category::Service,
            "medical" => Category::Medical,
            "award" => Category::Award,
            "personal" => Category::Personal,
            "performance" => Category::Performance,
            "patient" => Category::Patient,
            "assignment" => Category::Assignment,
            "historical" => Category::Historical,
            "custom" => Category::Custom,
            other => anyhow::bail!("unknown journal category: {other}"),
        };

        Ok(category)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_legacy_constant_names() {
        let category: Category = "SERVICE".parse().expect("category should parse");

        assert_eq!(Category::Service, category);
    }

    #[test]
    fn rejects_unknown_names() {
        let result = "promotion".parse::<Category>();

        assert!(result.is_err());
    }

    #[test]
    fn awards_share_the_service_journal() {
        assert_eq!(JournalKind::Service, Category::Award.journal_kind());
        assert_eq!(JournalKind::Service, Category::Custom.journal_kind());
        assert_eq!(JournalKind::Medical, Category::Medical.journal_kind());
    }
}
