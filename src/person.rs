use crate::journal::{JournalKind, LogEntry};

/// Pronoun set used when rendering templates that refer back to the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    NonBinary,
}

impl Gender {
    pub fn subject(self) -> &'static str {
        match self {
            Gender::Male => "he",
            Gender::Female => "she",
            Gender::NonBinary => "they",
        }
    }

    pub fn object(self) -> &'static str {
        match self {
            Gender::Male => "him",
            Gender::Female => "her",
            Gender::NonBinary => "them",
        }
    }

    pub fn possessive(self) -> &'static str {
        match self {
            Gender::Male => "his",
            Gender::Female => "her",
            Gender::NonBinary => "their",
        }
    }
}

/// The collaborator the category loggers write to: a campaign character that
/// owns one append-only journal list per [`JournalKind`], plus the read
/// accessors the templates interpolate (name, rank label, pronouns, edge).
///
/// Insertion order within each journal is chronological narrative and is
/// never reordered. A person is not shared across threads; callers that need
/// concurrency must guard each person with its own lock.
#[derive(Debug, Clone, Default)]
pub struct Person {
    name: String,
    rank: Option<String>,
    gender: Gender,
    edge: u32,
    service_journal: Vec<LogEntry>,
    medical_journal: Vec<LogEntry>,
    performance_journal: Vec<LogEntry>,
    patient_journal: Vec<LogEntry>,
    assignment_journal: Vec<LogEntry>,
    personal_journal: Vec<LogEntry>,
}

impl Person {
    pub fn new(name: impl Into<String>, gender: Gender) -> Person {
        Person {
            name: name.into(),
            gender,
            ..Person::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's current rank title, or an empty string when unranked.
    /// Loggers that interpolate the rank (promotion, demotion) expect the
    /// caller to have applied the rank change before logging it.
    pub fn rank_label(&self) -> &str {
        self.rank.as_deref().unwrap_or("")
    }

    pub fn set_rank(&mut self, rank: impl Into<String>) {
        self.rank = Some(rank.into());
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn edge(&self) -> u32 {
        self.edge
    }

    pub fn set_edge(&mut self, edge: u32) {
        self.edge = edge;
    }

    /// Appends an entry to the journal list its category belongs to.
    pub fn append(&mut self, entry: LogEntry) {
        self.journal_mut(entry.category().journal_kind()).push(entry);
    }

    pub fn add_service_entry(&mut self, entry: LogEntry) {
        self.service_journal.push(entry);
    }

    pub fn add_medical_entry(&mut self, entry: LogEntry) {
        self.medical_journal.push(entry);
    }

    pub fn add_performance_entry(&mut self, entry: LogEntry) {
        self.performance_journal.push(entry);
    }

    pub fn add_patient_entry(&mut self, entry: LogEntry) {
        self.patient_journal.push(entry);
    }

    pub fn add_assignment_entry(&mut self, entry: LogEntry) {
        self.assignment_journal.push(entry);
    }

    pub fn add_personal_entry(&mut self, entry: LogEntry) {
        self.personal_journal.push(entry);
    }

    pub fn journal(&self, kind: JournalKind) -> &[LogEntry] {
        match kind {
            JournalKind::Service => &self.service_journal,
            JournalKind::Medical => &self.medical_journal,
            JournalKind::Performance => &self.performance_journal,
            JournalKind::Patient => &self.patient_journal,
            JournalKind::Assignment => &self.assignment_journal,
            JournalKind::Personal => &self.personal_journal,
        }
    }

    /// Drops every journal entry the person owns.
    pub fn clear_journals(&mut self) {
        self.service_journal.clear();
        self.medical_journal.clear();
        self.performance_journal.clear();
        self.patient_journal.clear();
        self.assignment_journal.clear();
        self.personal_journal.clear();
    }

    fn journal_mut(&mut self, kind: JournalKind) -> &mut Vec<LogEntry> {
        match kind {
            JournalKind::Service => &mut self.service_journal,
            JournalKind::Medical => &mut self.medical_journal,
            JournalKind::Performance => &mut self.performance_journal,
            JournalKind::Patient => &mut self.patient_journal,
            JournalKind::Assignment => &mut self.assignment_journal,
            JournalKind::Personal => &mut self.personal_journal,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;
    use crate::journal::Category;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(3025, 1, 15).expect("date should be valid")
    }

    #[test]
    fn append_dispatches_on_category() {
        let mut person = Person::new("Natasha Kerensky", Gender::Female);

        person.append(LogEntry::new(date(), Category::Medical, "Suffered burns"));
        person.append(LogEntry::new(date(), Category::Award, "Awarded something"));

        assert_eq!(1, person.journal(JournalKind::Medical).len());
        assert_eq!(1, person.journal(JournalKind::Service).len());
        assert!(person.journal(JournalKind::Personal).is_empty());
    }

    #[test]
    fn clearing_journals_drops_every_entry() {
        let mut person = Person::new("Test", Gender::Male);

        person.append(LogEntry::new(date(), Category::Service, "Retired"));
        person.append(LogEntry::new(date(), Category::Medical, "Suffered burns"));
        person.clear_journals();

        assert!(person.journal(JournalKind::Service).is_empty());
        assert!(person.journal(JournalKind::Medical).is_empty());
    }

    #[test]
    fn journals_preserve_insertion_order() {
        let mut person = Person::new("Test", Gender::NonBinary);

        person.add_service_entry(LogEntry::new(date(), Category::Service, "first"));
        person.add_service_entry(LogEntry::new(date(), Category::Service, "second"));

        let descriptions: Vec<_> = person
            .journal(JournalKind::Service)
            .iter()
            .map(LogEntry::description)
            .collect();

        assert_eq!(vec!["first", "second"], descriptions);
    }
}
