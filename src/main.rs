use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use muster::classify::Classifier;
use muster::config::Config;
use muster::error::Result;
use muster::migrate::Migrator;
use muster::persist;
use muster::templates::TemplateSet;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("muster")
        .about("Campaign journal maintenance tools")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Campaign configuration file (campaign.toml)"),
        )
        .subcommand(
            Command::new("migrate")
                .about("Rewrite legacy free text and tag untagged entries in a journal file")
                .arg(Arg::new("journal").value_name("FILE").required(true))
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Report what would change without writing the file"),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify a single rendered description")
                .arg(Arg::new("description").value_name("TEXT").required(true)),
        )
        .get_matches();

    let templates = load_templates(&matches)?;
    let classifier = Classifier::new(&templates)?;

    match matches.subcommand() {
        Some(("migrate", arguments)) => migrate(&templates, &classifier, arguments),
        Some(("classify", arguments)) => classify(&classifier, arguments),
        _ => unreachable!("subcommand is required"),
    }
}

fn load_templates(matches: &ArgMatches) -> Result<TemplateSet> {
    let mut templates = TemplateSet::builtin();

    let Some(path) = matches.get_one::<String>("config") else {
        return Ok(templates);
    };

    let config = Config::load(path)?;

    if let Some(ref template_path) = config.journal.templates {
        let mut overlay_path = PathBuf::from(path);
        overlay_path.pop();
        overlay_path.push(template_path);

        templates.overlay(TemplateSet::load(overlay_path)?);
    }

    Ok(templates)
}

fn migrate(templates: &TemplateSet, classifier: &Classifier, arguments: &ArgMatches) -> Result<()> {
    let journal_path = arguments
        .get_one::<String>("journal")
        .expect("journal argument is required");
    let dry_run = arguments.get_flag("dry-run");

    let mut records = persist::load_records(journal_path)?;
    let migrator = Migrator::new(templates, classifier)?;
    let report = migrator.migrate(&mut records);

    if !dry_run {
        persist::store_records(journal_path, &records)?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn classify(classifier: &Classifier, arguments: &ArgMatches) -> Result<()> {
    let description = arguments
        .get_one::<String>("description")
        .expect("description argument is required");

    println!("{:?}", classifier.classify(description));

    Ok(())
}
