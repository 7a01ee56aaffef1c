use anyhow::Context;
use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::Read,
    path::Path,
    str::FromStr,
};

use crate::error::{Error, Result};
use crate::journal::Category;

/// The English template table compiled into the binary. Tables for other
/// locales are loaded from disk and overlaid on top of it.
const BUILTIN_EN: &str = include_str!("../templates/en.toml");

/// The session's table of description templates, keyed by a fixed identifier
/// and grouped by the category their entries are written under.
///
/// The table is built once during application start and passed to the
/// loggers and the classifier explicitly; there is no process-global table.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<String, Template>,
}

#[derive(Debug, Clone)]
struct Template {
    text: String,
    category: Category,
}

impl TemplateSet {
    /// The built-in English table.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table is malformed, which is a packaging error.
    pub fn builtin() -> TemplateSet {
        BUILTIN_EN
            .parse()
            .expect("built-in template table must parse")
    }

    /// Loads a template table from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<TemplateSet> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open template file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read template file")?;

        buffer.parse()
    }

    /// Replaces any template also present in `other`, and adds the rest.
    /// Used to overlay a locale file on top of the built-in table.
    pub fn overlay(&mut self, other: TemplateSet) {
        self.templates.extend(other.templates);
    }

    /// Renders the template for `key` with positional arguments.
    ///
    /// # Panics
    ///
    /// Panics when `key` is unknown or `args` does not match the template's
    /// placeholder count. Both indicate a caller bug, not a data problem.
    pub fn render(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        let Some(template) = self.templates.get(key) else {
            panic!("unknown template key: {key}")
        };

        let expected = placeholder_count(&template.text);
        assert_eq!(
            expected,
            args.len(),
            "template {key} takes {expected} arguments, got {}",
            args.len()
        );

        let mut output = String::with_capacity(template.text.len());

        for segment in segments(&template.text) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(index) => output.push_str(&args[index].to_string()),
            }
        }

        output
    }

    /// The raw template text for `key`, if present.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(|template| template.text.as_str())
    }

    /// All templates written under the given category, in key order.
    pub fn group(&self, category: Category) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().filter_map(move |(key, template)| {
            (template.category == category).then_some((key.as_str(), template.text.as_str()))
        })
    }
}

impl FromStr for TemplateSet {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let sections: BTreeMap<String, BTreeMap<String, String>> =
            toml::from_str(source).with_context(|| "Attempted to parse invalid template table")?;

        let mut templates = BTreeMap::new();

        for (section, entries) in sections {
            let category: Category = section
                .parse()
                .with_context(|| format!("Template section is not a category: {section}"))?;

            for (key, text) in entries {
                let template = Template { text, category };

                if templates.insert(key.clone(), template).is_some() {
                    anyhow::bail!("Duplicate template key across sections: {key}");
                }
            }
        }

        Ok(TemplateSet { templates })
    }
}

/// A parsed piece of a template: literal text or a positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Placeholder(usize),
}

/// Splits a template into literal runs and `{N}` placeholders. Braces that do
/// not delimit a numeric index are treated as literal text.
pub(crate) fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut parts = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find('{') {
        let placeholder = rest[start..]
            .find('}')
            .and_then(|end| rest[start + 1..start + end].parse::<usize>().ok().map(|index| (end, index)));

        let Some((end, index)) = placeholder else {
            parts.push(Segment::Literal(&rest[..=start]));
            rest = &rest[start + 1..];
            continue;
        };

        if start > 0 {
            parts.push(Segment::Literal(&rest[..start]));
        }

        parts.push(Segment::Placeholder(index));
        rest = &rest[start + end + 1..];
    }

    if !rest.is_empty() {
        parts.push(Segment::Literal(rest));
    }

    parts
}

/// Number of arguments a template expects: one past its highest placeholder
/// index, or zero when it has none.
pub(crate) fn placeholder_count(text: &str) -> usize {
    segments(text)
        .iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(index) => Some(index + 1),
            Segment::Literal(_) => None,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let templates = TemplateSet::builtin();

        assert_eq!(Some("Promoted to {0}"), templates.text("promoted-to"));
    }

    #[test]
    fn renders_positional_arguments() {
        let templates = TemplateSet::builtin();
        let rendered = templates.render("reassigned-unit", &[&"Fox Patrol", &"Wolf Lance"]);

        assert_eq!("Reassigned from Fox Patrol to Wolf Lance", rendered);
    }

    #[test]
    fn renders_templates_without_placeholders() {
        let templates = TemplateSet::builtin();

        assert_eq!("Killed in action", templates.render("killed-in-action", &[]));
    }

    #[test]
    #[should_panic]
    fn fails_fast_on_argument_count_mismatch() {
        let templates = TemplateSet::builtin();

        templates.render("promoted-to", &[]);
    }

    #[test]
    #[should_panic]
    fn fails_fast_on_unknown_key() {
        let templates = TemplateSet::builtin();

        templates.render("no-such-event", &[]);
    }

    #[test]
    fn overlay_replaces_existing_keys() {
        let mut templates = TemplateSet::builtin();
        let overlay: TemplateSet = "[service]\npromoted-to = \"Befördert zum {0}\"\n"
            .parse()
            .expect("overlay should parse");

        templates.overlay(overlay);

        assert_eq!(
            "Befördert zum Hauptmann",
            templates.render("promoted-to", &[&"Hauptmann"])
        );
        assert_eq!("Retired", templates.render("retired", &[]));
    }

    #[test]
    fn braces_without_an_index_are_literal() {
        let parts = segments("a {b} {0}");

        assert_eq!(
            vec![
                Segment::Literal("a {"),
                Segment::Literal("b} "),
                Segment::Placeholder(0),
            ],
            parts
        );
    }

    #[test]
    fn counts_placeholders_by_highest_index() {
        assert_eq!(0, placeholder_count("Retired"));
        assert_eq!(1, placeholder_count("Promoted to {0}"));
        assert_eq!(2, placeholder_count("Spent {0} XP on {1}"));
        assert_eq!(2, placeholder_count("{1} and {1}"));
    }

    #[test]
    fn duplicate_keys_across_sections_are_rejected() {
        let source = "[service]\njoined = \"Joined {0}\"\n[personal]\njoined = \"Joined {0}\"\n";
        let result = source.parse::<TemplateSet>();

        assert!(result.is_err());
    }
}
