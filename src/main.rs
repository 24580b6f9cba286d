//! deferq - run a deferred query against a snapshot of people

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use deferq::backend::MemoryBackend;
use deferq::expression::Expression;
use deferq::query::{ProviderConfig, QueryProvider};
use deferq::record::Person;
use std::path::PathBuf;
use std::sync::Arc;

/// deferq - Query a record snapshot through a deferred query provider
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot file to load people from (uses a built-in sample if omitted)
    #[arg(short = 'D', long)]
    data: Option<PathBuf>,

    /// Write the built-in sample to this snapshot file and exit
    #[arg(long)]
    save: Option<PathBuf>,

    /// Keep only people with this name (sent to the backend)
    #[arg(short, long)]
    name: Option<String>,

    /// Keep only people older than this (evaluated locally)
    #[arg(short = 'a', long)]
    min_age: Option<i32>,

    /// Fail instead of filtering locally when a filter cannot be sent to the backend
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Dan", 40),
        Person::new("Dan", 9),
        Person::new("Ann", 33),
        Person::new("Bob", 71),
        Person::new("Eve", 18),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Some(path) = &args.save {
        MemoryBackend::new(sample_people())
            .save(path)
            .context("Failed to save sample snapshot")?;
        println!("Wrote sample snapshot to {}", path.display());
        return Ok(());
    }

    let backend = match &args.data {
        Some(path) => Arc::new(
            MemoryBackend::<Person>::load(path).context("Failed to load snapshot")?,
        ),
        None => Arc::new(MemoryBackend::new(sample_people())),
    };

    let config = ProviderConfig::default().with_local_filtering(!args.strict);
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::with_config(backend.clone(), config));

    let mut query = provider.query();
    if let Some(name) = args.name {
        query = query.where_eq("Name", name);
    }
    if let Some(min_age) = args.min_age {
        query = query.filter(Expression::gt(
            Expression::field("Age"),
            Expression::literal(min_age),
        ));
    }

    println!("Query: {}", query.expression());
    let people = query.to_vec()?;
    for person in &people {
        println!("  {:<12} {:>4}", person.name, person.age);
    }

    for fetch in backend.fetch_log() {
        match fetch.filter {
            Some(filter) => println!("Fetched {} where {}", fetch.element_type, filter),
            None => println!("Fetched all {}", fetch.element_type),
        }
    }
    println!("({} rows)", people.len());

    Ok(())
}
