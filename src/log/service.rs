use std::fmt;

use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes service-history events (recruitment, rank changes, captivity,
/// separation) to a person's service journal.
pub struct ServiceLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> ServiceLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> ServiceLogger<'a> {
        ServiceLogger { templates }
    }

    pub fn joined(&self, person: &mut Person, date: NaiveDate, campaign: &str) {
        self.append(person, date, "joined", &[&campaign]);
    }

    pub fn recruited(&self, person: &mut Person, date: NaiveDate, campaign: &str) {
        self.append(person, date, "recruited", &[&campaign]);
    }

    /// Logs the person's current rank label; callers apply the promotion to
    /// the person before logging it.
    pub fn promoted_to(&self, person: &mut Person, date: NaiveDate) {
        let rank = person.rank_label().to_string();
        self.append(person, date, "promoted-to", &[&rank]);
    }

    pub fn demoted_to(&self, person: &mut Person, date: NaiveDate) {
        let rank = person.rank_label().to_string();
        self.append(person, date, "demoted-to", &[&rank]);
    }

    pub fn made_prisoner(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "made-prisoner", &[]);
    }

    pub fn made_prisoner_by(&self, person: &mut Person, date: NaiveDate, captor: &str) {
        self.append(person, date, "made-prisoner-by", &[&captor]);
    }

    pub fn made_bondsman(&self, person: &mut Person, date: NaiveDate, clan: &str) {
        self.append(person, date, "made-bondsman", &[&clan]);
    }

    pub fn freed(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "freed", &[]);
    }

    pub fn returned_from_captivity(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "returned-from-captivity", &[]);
    }

    pub fn retired(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "retired", &[]);
    }

    pub fn retired_due_to_wounds(&self, person: &mut Person, date: NaiveDate) {
        let possessive = person.gender().possessive();
        self.append(person, date, "retired-due-to-wounds", &[&possessive]);
    }

    pub fn deserted(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "deserted", &[]);
    }

    /// Returns the entry so callers can also attach it to a battle report.
    pub fn killed_in_action(&self, person: &mut Person, date: NaiveDate) -> LogEntry {
        let entry = LogEntry::new(
            date,
            Category::Service,
            self.templates.render("killed-in-action", &[]),
        );
        person.add_service_entry(entry.clone());

        entry
    }

    pub fn missing_in_action(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "missing-in-action", &[]);
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_service_entry(LogEntry::new(date, Category::Service, description));
    }
}
