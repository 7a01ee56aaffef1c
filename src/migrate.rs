//! One-time migration of journals saved by old versions: normalizes
//! pre-template free text into the current template wording and tags
//! untagged records with a classified category. This pass runs over save
//! data during import, never on the live logging path.

use regex::Regex;
use serde::Serialize;

use crate::classify::{Classification, Classifier};
use crate::error::Result;
use crate::journal::Category;
use crate::persist::{self, EntryRecord};
use crate::templates::TemplateSet;

/// Counts reported to the operator after a migration pass. Ambiguous rows
/// are the ones worth a manual review.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MigrationReport {
    /// Free-text descriptions rewritten into current template wording.
    pub rewritten: usize,
    /// Untagged records that classified cleanly.
    pub classified: usize,
    /// Untagged records matching templates from more than one category;
    /// tagged custom and left for operator review.
    pub ambiguous: usize,
    /// Untagged records matching no known template; tagged custom.
    pub unmatched: usize,
    /// Records that already carried a category tag.
    pub already_tagged: usize,
}

/// Rewrites legacy journal records in place.
pub struct Migrator<'a> {
    templates: &'a TemplateSet,
    classifier: &'a Classifier,
    rewrites: Vec<Rewrite>,
}

struct Rewrite {
    pattern: Regex,
    template_key: &'static str,
}

/// The free-text shapes written before the template system existed, and the
/// template each one maps onto.
const LEGACY_REWRITES: [(&str, &str); 2] = [
    (r"^Made Prisoner (.+)$", "made-prisoner-by"),
    (r"^Made Bondsman (.+)$", "made-bondsman"),
];

impl<'a> Migrator<'a> {
    pub fn new(templates: &'a TemplateSet, classifier: &'a Classifier) -> Result<Migrator<'a>> {
        let rewrites = LEGACY_REWRITES
            .into_iter()
            .map(|(pattern, template_key)| {
                Ok(Rewrite {
                    pattern: Regex::new(pattern)?,
                    template_key,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Migrator {
            templates,
            classifier,
            rewrites,
        })
    }

    /// Runs the full pass: free-text rewrites first, then classification of
    /// records that carry no category tag.
    pub fn migrate(&self, records: &mut [EntryRecord]) -> MigrationReport {
        let mut report = MigrationReport::default();

        for record in records {
            self.migrate_record(record, &mut report);
        }

        report
    }

    fn migrate_record(&self, record: &mut EntryRecord, report: &mut MigrationReport) {
        let mut description = persist::unescape(&record.description);

        if let Some(rewritten) = self.rewrite(&description) {
            record.description = persist::escape(&rewritten);
            description = rewritten;
            report.rewritten += 1;
        }

        if record.category.is_some() {
            report.already_tagged += 1;

            return;
        }

        let category = match self.classifier.classify(&description) {
            Classification::Match { category, .. } => {
                report.classified += 1;

                category
            }
            Classification::Ambiguous { candidates } => {
                tracing::warn!(
                    date = %record.date,
                    description = %description,
                    ?candidates,
                    "entry matches templates from multiple categories, tagging custom"
                );
                report.ambiguous += 1;

                Category::Custom
            }
            Classification::Unknown => {
                report.unmatched += 1;

                Category::Custom
            }
        };

        record.category = Some(category.to_string());
    }

    fn rewrite(&self, description: &str) -> Option<String> {
        self.rewrites.iter().find_map(|rewrite| {
            let captures = rewrite.pattern.captures(description)?;
            let name = captures.get(1)?.as_str();

            Some(self.templates.render(rewrite.template_key, &[&name]))
        })
    }
}
