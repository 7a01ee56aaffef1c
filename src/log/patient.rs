use std::fmt;

use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes infirmary-stay events, from the patient's point of view, to a
/// person's patient journal.
pub struct PatientLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> PatientLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> PatientLogger<'a> {
        PatientLogger { templates }
    }

    pub fn admitted_to_infirmary(&self, person: &mut Person, date: NaiveDate, reason: &str) {
        self.append(person, date, "admitted-to-infirmary", &[&reason]);
    }

    pub fn transferred_to_doctor(&self, patient: &mut Person, date: NaiveDate, doctor: &Person) {
        self.append(patient, date, "transferred-to-doctor", &[&doctor.name()]);
    }

    pub fn released_from_infirmary(&self, person: &mut Person, date: NaiveDate) {
        self.append(person, date, "released-from-infirmary", &[]);
    }

    fn append(&self, person: &mut Person, date: NaiveDate, key: &str, args: &[&dyn fmt::Display]) {
        let description = self.templates.render(key, args);
        person.add_patient_entry(LogEntry::new(date, Category::Patient, description));
    }
}
