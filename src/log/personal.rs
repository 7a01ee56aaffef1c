use std::fmt;

use chrono::NaiveDate;

use crate::config::JournalConfig;
use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes life events (marriage, loss, character growth) to a person's
/// personal journal.
///
/// The growth events (`gained_edge`, `improved_skill`, `gained_ability`) are
/// gated by campaign configuration and silently no-op when the matching flag
/// is off. That is expected behavior, not an error.
pub struct PersonalLogger<'a> {
    templates: &'a TemplateSet,
    config: &'a JournalConfig,
}

impl<'a> PersonalLogger<'a> {
    pub fn new(templates: &'a TemplateSet, config: &'a JournalConfig) -> PersonalLogger<'a> {
        PersonalLogger { templates, config }
    }

    pub fn married_to(&self, person: &mut Person, date: NaiveDate, spouse: &Person) {
        self.append(person, date, "married-to", &[&spouse.name()]);
    }

    pub fn divorced_from(&self, person: &mut Person, date: NaiveDate, spouse: &Person) {
        self.append(person, date, "divorced-from", &[&spouse.name()]);
    }

    /// Written to the *surviving* spouse's journal, not the deceased's.
    pub fn spouse_killed_in_action(
        &self,
        survivor: &mut Person,
        date: NaiveDate,
        spouse: &Person,
    ) {
        self.append(survivor, date, "spouse-killed-in-action", &[&spouse.name()]);
    }

    /// Logs the person's current edge total; callers apply the gain first.
    pub fn gained_edge(&self, person: &mut Person, date: NaiveDate) {
        if !self.config.log_edge_gains {
            return;
        }

        let edge = person.edge();
        self.append(person, date, "gained-edge", &[&edge]);
    }

    pub fn improved_skill(&self, person: &mut Person, date: NaiveDate, skill: &str, level: &str) {
        if !self.config.log_skill_gains {
            return;
        }

        self.append(person, date, "improved-skill", &[&skill, &level]);
    }

    pub fn gained_ability(&self, person: &mut Person, date: NaiveDate, ability: &str) {
        if !self.config.log_ability_gains {
            return;
        }

        self.append(person, date, "gained-ability", &[&ability]);
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_personal_entry(LogEntry::new(date, Category::Personal, description));
    }
}
