use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::{value::Table, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Configuration for the journal subsystem itself.
    pub journal: JournalConfig,

    /// Any remaining configuration for other campaign subsystems.
    rest: Value,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open config file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read config file")?;

        Config::from_str(&buffer)
    }

    /// Deserializes a non-journal section of the campaign config, for other
    /// subsystems that share the file.
    pub fn get<'de, T: Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.rest
            .get(key)
            .and_then(|value| value.clone().try_into().ok())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal: JournalConfig::default(),
            rest: Value::Table(Table::default()),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Value::deserialize(deserializer)?;
        let Value::Table(mut table) = raw else {
            return Err(D::Error::custom("campaign.toml must always be a toml table"));
        };

        let journal: JournalConfig = table
            .remove("journal")
            .map(|journal| journal.try_into().map_err(D::Error::custom))
            .transpose()?
            .unwrap_or_default();

        let config = Config {
            journal,
            rest: Value::Table(table),
        };

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct JournalConfig {
    /// Locale of the template table.
    pub locale: String,
    /// Optional template file overlaid on top of the built-in table.
    pub templates: Option<PathBuf>,
    /// Whether skill improvements are written to the personal journal.
    pub log_skill_gains: bool,
    /// Whether edge gains are written to the personal journal.
    pub log_edge_gains: bool,
    /// Whether gained abilities are written to the personal journal.
    pub log_ability_gains: bool,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            locale: String::from("en"),
            templates: None,
            log_skill_gains: true,
            log_edge_gains: true,
            log_ability_gains: true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_journal_section_falls_back_to_defaults() {
        let config: Config = "".parse().expect("config should parse");

        assert_eq!(JournalConfig::default(), config.journal);
        assert!(config.journal.log_edge_gains);
    }

    #[test]
    fn journal_flags_are_kebab_case() {
        let source = "[journal]\nlog-edge-gains = false\nlocale = \"de\"\n";
        let config: Config = source.parse().expect("config should parse");

        assert!(!config.journal.log_edge_gains);
        assert!(config.journal.log_skill_gains);
        assert_eq!("de", config.journal.locale);
    }

    #[test]
    fn other_sections_stay_reachable() {
        #[derive(Debug, Deserialize, PartialEq)]
        #[serde(rename_all = "kebab-case")]
        struct Finances {
            starting_funds: u32,
        }

        let source = "[finances]\nstarting-funds = 100\n";
        let config: Config = source.parse().expect("config should parse");
        let finances: Finances = config.get("finances").expect("section should deserialize");

        assert_eq!(Finances { starting_funds: 100 }, finances);
    }
}
