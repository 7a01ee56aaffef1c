use std::fmt;

use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes experience bookkeeping events to a person's performance journal.
pub struct PerformanceLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> PerformanceLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> PerformanceLogger<'a> {
        PerformanceLogger { templates }
    }

    pub fn gained_xp(&self, person: &mut Person, date: NaiveDate, xp: u32) {
        self.append(person, date, "gained-xp", &[&xp]);
    }

    pub fn spent_xp(&self, person: &mut Person, date: NaiveDate, xp: u32, purchase: &str) {
        self.append(person, date, "spent-xp", &[&xp, &purchase]);
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_performance_entry(LogEntry::new(date, Category::Performance, description));
    }
}
