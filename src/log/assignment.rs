use std::fmt;

use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes unit and formation assignment events to a person's assignment
/// journal.
///
/// The `reassigned_*` functions carry a public contract over absent
/// collaborators:
/// - `(None, Some(x))` logs the same entry as "added to x",
/// - `(Some(x), None)` logs the same entry as "removed from x",
/// - `(Some(a), Some(b))` logs a single reassignment entry in place of the
///   separate add and remove entries,
/// - `(None, None)` logs nothing; the formation variant also reports an
///   internal error, since game logic should never emit that transition.
pub struct AssignmentLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> AssignmentLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> AssignmentLogger<'a> {
        AssignmentLogger { templates }
    }

    /// No-op when `unit` is absent.
    pub fn assigned_to_unit(&self, person: &mut Person, date: NaiveDate, unit: Option<&str>) {
        let Some(unit) = unit else {
            return;
        };

        self.append(person, date, "assigned-to-unit", &[&unit]);
    }

    /// No-op when `unit` is absent.
    pub fn removed_from_unit(&self, person: &mut Person, date: NaiveDate, unit: Option<&str>) {
        let Some(unit) = unit else {
            return;
        };

        self.append(person, date, "removed-from-unit", &[&unit]);
    }

    pub fn reassigned_unit(
        &self,
        person: &mut Person,
        date: NaiveDate,
        from: Option<&str>,
        to: Option<&str>,
    ) {
        match (from, to) {
            (None, None) => {}
            (None, Some(_)) => self.assigned_to_unit(person, date, to),
            (Some(_), None) => self.removed_from_unit(person, date, from),
            (Some(from), Some(to)) => {
                self.append(person, date, "reassigned-unit", &[&from, &to]);
            }
        }
    }

    /// No-op when `formation` is absent.
    pub fn added_to_formation(
        &self,
        person: &mut Person,
        date: NaiveDate,
        formation: Option<&str>,
    ) {
        let Some(formation) = formation else {
            return;
        };

        self.append(person, date, "added-to-formation", &[&formation]);
    }

    /// No-op when `formation` is absent.
    pub fn removed_from_formation(
        &self,
        person: &mut Person,
        date: NaiveDate,
        formation: Option<&str>,
    ) {
        let Some(formation) = formation else {
            return;
        };

        self.append(person, date, "removed-from-formation", &[&formation]);
    }

    pub fn reassigned_formation(
        &self,
        person: &mut Person,
        date: NaiveDate,
        from: Option<&str>,
        to: Option<&str>,
    ) {
        match (from, to) {
            (None, None) => {
                tracing::error!(
                    person = person.name(),
                    "formation reassignment requested with neither source nor destination"
                );
            }
            (None, Some(_)) => self.added_to_formation(person, date, to),
            (Some(_), None) => self.removed_from_formation(person, date, from),
            (Some(from), Some(to)) => {
                self.append(person, date, "reassigned-formation", &[&from, &to]);
            }
        }
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_assignment_entry(LogEntry::new(date, Category::Assignment, description));
    }
}
