//! The persisted journal format and its read side. Each entry serializes
//! three fields: an ISO-8601 date, an XML-escaped description, and the
//! category name, which is absent on saves from before entries were tagged.
//!
//! Restoring is tolerant at the granularity of a single entry: one malformed
//! record is logged and skipped, never aborting the surrounding campaign
//! load.

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::error::Result;
use crate::journal::{Category, LogEntry};

/// The on-disk shape of one journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EntryRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntryRecord {
    pub fn from_entry(entry: &LogEntry) -> EntryRecord {
        EntryRecord {
            date: entry.date(),
            description: escape(entry.description()),
            category: Some(entry.category().to_string()),
        }
    }

    /// Rebuilds the in-memory entry. An absent or unparseable category
    /// degrades to [`Category::Custom`] rather than failing the load.
    pub fn restore(&self) -> LogEntry {
        let category = match self.category.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|error| {
                tracing::warn!(%error, "journal entry has an unusable category tag");

                Category::Custom
            }),
            None => Category::Custom,
        };

        LogEntry::new(self.date, category, unescape(&self.description))
    }
}

/// Rebuilds one entry from its raw serialized form, or `None` when the
/// record cannot be read. The failure is logged; callers skip the entry and
/// keep loading.
pub fn restore_entry(raw: serde_json::Value) -> Option<LogEntry> {
    match serde_json::from_value::<EntryRecord>(raw) {
        Ok(record) => Some(record.restore()),
        Err(error) => {
            tracing::error!(%error, "skipping malformed journal entry");

            None
        }
    }
}

/// Reads a serialized journal, skipping individual entries that cannot be
/// reconstructed.
pub fn read_journal(source: &str) -> Result<Vec<LogEntry>> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(source).with_context(|| "Journal file is not a JSON array")?;

    Ok(raw.into_iter().filter_map(restore_entry).collect())
}

pub fn write_journal(entries: &[LogEntry]) -> Result<String> {
    let records: Vec<EntryRecord> = entries.iter().map(EntryRecord::from_entry).collect();

    serde_json::to_string_pretty(&records).with_context(|| "Failed to serialize journal")
}

pub fn load_journal(path: impl AsRef<Path>) -> Result<Vec<LogEntry>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;

    read_journal(&source)
}

/// Loads the raw records of a journal file without rebuilding entries, for
/// tooling that rewrites the file in place (the legacy migration pass).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<EntryRecord>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;

    serde_json::from_str(&source).with_context(|| "Journal file is not a JSON array of entries")
}

pub fn store_records(path: impl AsRef<Path>, records: &[EntryRecord]) -> Result<()> {
    let path = path.as_ref();
    let serialized = serde_json::to_string_pretty(records)
        .with_context(|| "Failed to serialize journal records")?;

    fs::write(path, serialized)
        .with_context(|| format!("Failed to write journal file: {}", path.display()))
}

/// Escapes the five XML metacharacters in a description.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }

    escaped
}

pub fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        unescaped.push_str(&rest[..start]);
        rest = &rest[start..];

        let replaced = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .iter()
        .find_map(|(entity, replacement)| {
            rest.strip_prefix(entity)
                .map(|remainder| (remainder, *replacement))
        });

        match replaced {
            Some((remainder, replacement)) => {
                unescaped.push(replacement);
                rest = remainder;
            }
            None => {
                // Not one of ours; keep the ampersand as-is.
                unescaped.push('&');
                rest = &rest[1..];
            }
        }
    }

    unescaped.push_str(rest);

    unescaped
}

#[cfg(test)]
mod test {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(3025, 1, 15).expect("date should be valid")
    }

    #[test]
    fn escape_round_trips() {
        let original = r#"Awarded "Gallantry" <1st class> & bar for the unit's stand"#;

        assert_eq!(original, unescape(&escape(original)));
    }

    #[test]
    fn unescape_leaves_bare_ampersands_alone() {
        assert_eq!("K&F Salvage", unescape("K&F Salvage"));
    }

    #[test]
    fn missing_category_restores_as_custom() {
        let record = EntryRecord {
            date: date(),
            description: String::from("Promoted to Captain"),
            category: None,
        };

        assert_eq!(Category::Custom, record.restore().category());
    }

    #[test]
    fn unparseable_category_restores_as_custom() {
        let record = EntryRecord {
            date: date(),
            description: String::from("Promoted to Captain"),
            category: Some(String::from("PROMOTION")),
        };

        assert_eq!(Category::Custom, record.restore().category());
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let source = r#"[
            { "date": "3025-01-15", "description": "Retired", "category": "service" },
            { "date": "not a date", "description": "Broken" },
            { "date": "3025-02-01", "description": "Freed", "category": "service" }
        ]"#;

        let journal = read_journal(source).expect("journal should load");

        let descriptions: Vec<_> = journal.iter().map(LogEntry::description).collect();
        assert_eq!(vec!["Retired", "Freed"], descriptions);
    }
}
