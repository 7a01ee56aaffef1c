use std::fmt;

use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes treatment and injury events to a person's medical journal.
pub struct MedicalLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> MedicalLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> MedicalLogger<'a> {
        MedicalLogger { templates }
    }

    pub fn injured(&self, person: &mut Person, date: NaiveDate, injury: &str) {
        self.append(person, date, "injured", &[&injury]);
    }

    pub fn severely_injured(&self, person: &mut Person, date: NaiveDate, injury: &str) {
        self.append(person, date, "severely-injured", &[&injury]);
    }

    pub fn successfully_treated(
        &self,
        patient: &mut Person,
        date: NaiveDate,
        doctor: &Person,
        injuries: u32,
    ) {
        self.append(
            patient,
            date,
            "successfully-treated",
            &[&doctor.name(), &injuries],
        );
    }

    pub fn recovered(&self, person: &mut Person, date: NaiveDate, injury: &str) {
        self.append(person, date, "recovered", &[&injury]);
    }

    pub fn died_in_infirmary(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "died-in-infirmary", &[]);
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_medical_entry(LogEntry::new(date, Category::Medical, description));
    }
}
