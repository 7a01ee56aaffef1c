use chrono::NaiveDate;

use crate::journal::{Category, LogEntry};
use crate::person::Person;
use crate::templates::TemplateSet;

/// Writes decoration events to a person's service journal under the award
/// category.
pub struct AwardLogger<'a> {
    templates: &'a TemplateSet,
}

impl<'a> AwardLogger<'a> {
    pub fn new(templates: &'a TemplateSet) -> AwardLogger<'a> {
        AwardLogger { templates }
    }

    /// Returns the entry so callers can also attach it to the award roster.
    pub fn awarded(
        &self,
        person: &mut Person,
        date: NaiveDate,
        award: &str,
        citation: &str,
    ) -> LogEntry {
        let description = self.templates.render("awarded", &[&award, &citation]);
        let entry = LogEntry::new(date, Category::Award, description);
        person.add_service_entry(entry.clone());

        entry
    }

    pub fn award_revoked(&self, person: &mut Person, date: NaiveDate, award: &str) {
        let description = self.templates.render("award-revoked", &[&award]);
        person.add_service_entry(LogEntry::new(date, Category::Award, description));
    }
}
