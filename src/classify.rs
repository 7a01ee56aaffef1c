//! Best-effort recovery of a category for legacy journal entries that were
//! saved before entries carried a category tag. Every known template is
//! compiled into an anchored pattern (placeholders become wildcards) once at
//! startup; classification tests the rendered text against those patterns.

use anyhow::Context;
use regex::Regex;

use crate::error::Result;
use crate::journal::Category;
use crate::templates::{self, Segment, TemplateSet};

/// The order in which category groups are tested. The first four positions
/// reproduce the ordering the save-file format has always used; the later
/// categories postdate untagged saves and are appended after them.
pub const PRECEDENCE: [Category; 7] = [
    Category::Service,
    Category::Personal,
    Category::Award,
    Category::Medical,
    Category::Assignment,
    Category::Performance,
    Category::Patient,
];

/// Outcome of classifying one rendered description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Exactly one category group had a matching template.
    Match { category: Category, key: String },
    /// Template patterns from more than one category matched the text. The
    /// candidates are listed in precedence order, one per category.
    Ambiguous { candidates: Vec<(Category, String)> },
    /// No known template matches the text.
    Unknown,
}

impl Classification {
    /// Collapses the outcome to a category the way a campaign load needs it:
    /// an ambiguous or unknown description degrades to [`Category::Custom`].
    /// Ambiguity is reported through the diagnostic log rather than resolved
    /// by guessing.
    pub fn category_or_custom(&self) -> Category {
        match self {
            Classification::Match { category, .. } => *category,
            Classification::Ambiguous { candidates } => {
                tracing::warn!(
                    ?candidates,
                    "description matches templates from multiple categories, keeping custom"
                );

                Category::Custom
            }
            Classification::Unknown => Category::Custom,
        }
    }
}

/// A table of compiled template matchers, built once per session.
#[derive(Debug)]
pub struct Classifier {
    groups: Vec<CategoryGroup>,
}

#[derive(Debug)]
struct CategoryGroup {
    category: Category,
    matchers: Vec<TemplateMatcher>,
}

#[derive(Debug)]
struct TemplateMatcher {
    key: String,
    pattern: Regex,
}

impl Classifier {
    pub fn new(templates: &TemplateSet) -> Result<Classifier> {
        let mut groups = Vec::with_capacity(PRECEDENCE.len());

        for category in PRECEDENCE {
            let mut matchers = Vec::new();

            for (key, text) in templates.group(category) {
                let pattern = compile_template(text)
                    .with_context(|| format!("Failed to compile matcher for template: {key}"))?;

                matchers.push(TemplateMatcher {
                    key: key.to_string(),
                    pattern,
                });
            }

            groups.push(CategoryGroup { category, matchers });
        }

        Ok(Classifier { groups })
    }

    /// Tests `description` against every category group in precedence order.
    /// Within a group only the first matching template is recorded; a match
    /// in two *different* groups makes the outcome ambiguous.
    pub fn classify(&self, description: &str) -> Classification {
        let mut candidates = Vec::new();

        for group in &self.groups {
            let matched = group
                .matchers
                .iter()
                .find(|matcher| matcher.pattern.is_match(description));

            if let Some(matcher) = matched {
                candidates.push((group.category, matcher.key.clone()));
            }
        }

        match candidates.len() {
            0 => Classification::Unknown,
            1 => {
                let (category, key) = candidates.remove(0);

                Classification::Match { category, key }
            }
            _ => Classification::Ambiguous { candidates },
        }
    }
}

/// Turns a template into an anchored pattern: literal runs are escaped and
/// each positional placeholder becomes a non-greedy wildcard capture.
fn compile_template(text: &str) -> Result<Regex> {
    let mut pattern = String::from("^");

    for segment in templates::segments(text) {
        match segment {
            Segment::Literal(literal) => pattern.push_str(&regex::escape(literal)),
            Segment::Placeholder(_) => pattern.push_str("(.*?)"),
        }
    }

    pattern.push('$');

    Ok(Regex::new(&pattern)?)
}

#[cfg(test)]
mod test {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&TemplateSet::builtin()).expect("classifier should build")
    }

    #[test]
    fn promotion_text_classifies_as_service() {
        let classification = classifier().classify("Promoted to Captain");

        assert_eq!(
            Classification::Match {
                category: Category::Service,
                key: String::from("promoted-to"),
            },
            classification
        );
    }

    #[test]
    fn edge_gain_text_classifies_as_personal() {
        let classification = classifier().classify("Gained an edge point, now has 3");

        assert_eq!(
            Classification::Match {
                category: Category::Personal,
                key: String::from("gained-edge"),
            },
            classification
        );
    }

    #[test]
    fn unknown_text_degrades_to_custom() {
        let classification = classifier().classify("Dropped a wrench in the mech bay");

        assert_eq!(Classification::Unknown, classification);
        assert_eq!(Category::Custom, classification.category_or_custom());
    }

    #[test]
    fn matching_is_anchored_not_substring() {
        let classification = classifier().classify("Was Promoted to Captain last week");

        assert_eq!(Classification::Unknown, classification);
    }

    #[test]
    fn cross_category_ambiguity_is_not_guessed() {
        let templates: TemplateSet =
            "[service]\ncommended = \"Recognized for {0}\"\n[award]\ncited = \"Recognized for {0}\"\n"
                .parse()
                .expect("templates should parse");
        let classifier = Classifier::new(&templates).expect("classifier should build");

        let classification = classifier.classify("Recognized for bravery");

        let Classification::Ambiguous { ref candidates } = classification else {
            panic!("expected an ambiguous outcome, got {classification:?}")
        };

        assert_eq!(
            vec![
                (Category::Service, String::from("commended")),
                (Category::Award, String::from("cited")),
            ],
            *candidates
        );
        assert_eq!(Category::Custom, classification.category_or_custom());
    }

    #[test]
    fn builtin_table_has_no_cross_category_ambiguity() {
        let templates = TemplateSet::builtin();
        let classifier = Classifier::new(&templates).expect("classifier should build");

        for category in PRECEDENCE {
            for (key, text) in templates.group(category) {
                let rendered = text.replace("{0}", "alpha").replace("{1}", "beta");

                match classifier.classify(&rendered) {
                    Classification::Match {
                        category: found, ..
                    } => assert_eq!(category, found, "template {key} classified into {found}"),
                    other => panic!("template {key} produced {other:?}"),
                }
            }
        }
    }
}
