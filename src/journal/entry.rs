use chrono::NaiveDate;

use super::Category;

/// A single narrative record attached to a person: a calendar date, the
/// rendered description text, and the category deciding which journal list
/// the entry belongs to.
///
/// Entries are constructed by the category loggers (or restored from a saved
/// campaign) and are immutable afterwards, except through [`LogEntry::edit`],
/// which backs the user-facing edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    date: NaiveDate,
    description: String,
    category: Category,
}

impl LogEntry {
    pub fn new(date: NaiveDate, category: Category, description: impl Into<String>) -> LogEntry {
        LogEntry {
            date,
            description: description.into(),
            category,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replaces the date and description in place. The category is fixed for
    /// the lifetime of the entry; recategorizing means writing a new entry.
    pub fn edit(&mut self, date: NaiveDate, description: impl Into<String>) {
        self.date = date;
        self.description = description.into();
    }
}
