use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_OUTPUT, DEFAULT_PATTERN, DuplicatePolicy, MapperConfig};
use crate::indexer::JourneyMapper;
use crate::logging::TracingSink;
use crate::parsers::FrontMatterParser;
use crate::runner::run_all;

#[derive(Parser)]
#[command(name = "journey-mapper")]
#[command(version = "0.1.0")]
#[command(about = "Generate the journey lookup file for the site templates", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct SiteArgs {
    /// Site root the content and output paths are relative to
    #[arg(long, global = true, env = "JOURNEY_MAPPER_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern matching journey documents
    #[arg(long, global = true, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Output file for the journey mapping
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Fail when two journeys share a slug instead of keeping the later one
    #[arg(long, global = true)]
    pub strict_duplicates: bool,
}

impl SiteArgs {
    pub fn config(&self) -> MapperConfig {
        MapperConfig {
            root: self.root.clone(),
            pattern: self.pattern.clone(),
            output: self.output.clone(),
            duplicates: if self.strict_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Overwrite
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the journey mapping (default)
    Build,
    /// Print the journeys that would be written, without touching the output file
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut mapper = JourneyMapper::new(
        cli.site.config(),
        Box::new(FrontMatterParser),
        Box::new(TracingSink::default()),
    );

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => run_all(&mut [&mut mapper]),
        Commands::List => list_journeys(&mapper),
    }
}

fn list_journeys(mapper: &JourneyMapper) -> Result<()> {
    let journeys = mapper.find_journeys()?;
    let mapping = mapper.build_mapping(&journeys)?;

    let width = mapping.keys().map(|slug| slug.len()).max().unwrap_or(0);
    for (slug, entry) in &mapping {
        println!("{:<width$}  {}", slug, entry.title, width = width);
    }
    println!();
    println!("{} journeys ({} documents)", mapping.len(), journeys.len());

    Ok(())
}
