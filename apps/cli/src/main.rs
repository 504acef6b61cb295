use std::path::{Path, PathBuf};
use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heritage_core::services::{knowledge, regions};
use heritage_core::Resolver;
use heritage_providers::{ChatMessage, ProviderCredentials};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "heritage",
    version,
    about = "Ask the Indian cultural heritage guide from the shell."
)]
struct Cli {
    /// Log the resolving stage and provider traffic to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask a free-text question.
    Ask {
        message: String,
        /// JSON file with prior turns: [{"role": "user", "content": "..."}, ...]
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Request a quiz hint that does not reveal the answer.
    Hint {
        question: String,
        /// Answer options (may be repeated).
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Generate a cultural story about a topic.
    Story {
        topic: String,
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Plan a day-wise cultural itinerary for a state.
    Itinerary {
        state: String,
        #[arg(long, default_value_t = 5)]
        days: u32,
    },
    /// Describe a tradition as it was two centuries ago.
    Perspective {
        tradition: String,
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Search for cultural suggestions.
    Search { query: String },
    /// Browse the curated fact dataset.
    Facts {
        /// Show facts from one category.
        #[arg(long)]
        category: Option<String>,
        /// Show N random facts instead.
        #[arg(long)]
        random: Option<usize>,
    },
    /// List known regions, or show one by slug.
    Regions {
        #[arg(long)]
        slug: Option<String>,
    },
    /// Report provider availability.
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let resolver = Resolver::new(ProviderCredentials::from_env());

    match cli.command {
        Command::Ask { message, history } => {
            let history = load_history(history.as_deref())?;
            let resolution = resolver.resolve(&message, &history).await;
            info!(target: "heritage_cli", stage = resolution.stage.label(), "query resolved");
            println!("{}", resolution.answer);
        }
        Command::Hint { question, options } => {
            println!("{}", resolver.quiz_hint(&question, &options).await);
        }
        Command::Story { topic, context } => {
            println!("{}", resolver.cultural_story(&topic, &context).await);
        }
        Command::Itinerary { state, days } => {
            println!("{}", resolver.travel_itinerary(&state, days).await);
        }
        Command::Perspective { tradition, context } => {
            println!("{}", resolver.historical_perspective(&tradition, &context).await);
        }
        Command::Search { query } => {
            println!("{}", resolver.cultural_search(&query).await);
        }
        Command::Facts { category, random } => handle_facts(category.as_deref(), random),
        Command::Regions { slug } => handle_regions(slug.as_deref())?,
        Command::Status => {
            let status = resolver.service_status();
            for provider in &status.providers {
                let state = if provider.available {
                    "configured"
                } else {
                    "not configured"
                };
                println!("{}: {state}", provider.kind.name());
            }
            match status.primary {
                Some(kind) => println!("primary: {}", kind.name()),
                None => println!("primary: none (answers fall back to the built-in guide)"),
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "info,heritage_core=debug,heritage_providers=debug,heritage_cli=info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_history(path: Option<&Path>) -> Result<Vec<ChatMessage>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read history file {}", path.display()))?;
    serde_json::from_str(&raw).context("history file is not a JSON array of {role, content} turns")
}

fn handle_facts(category: Option<&str>, random: Option<usize>) {
    if let Some(count) = random {
        for fact in knowledge::random_facts(count) {
            println!("[{}] {}\n{}\n", fact.category, fact.question, fact.answer);
        }
        return;
    }

    match category {
        Some(category) => {
            let facts = knowledge::facts_by_category(category);
            if facts.is_empty() {
                println!("no facts recorded under \"{category}\"");
            }
            for fact in facts {
                println!("{}\n{}\n", fact.question, fact.answer);
            }
        }
        None => {
            let mut categories: Vec<&str> = Vec::new();
            for fact in knowledge::FACTS {
                if !categories.contains(&fact.category) {
                    categories.push(fact.category);
                }
            }
            for category in categories {
                let count = knowledge::facts_by_category(category).len();
                println!("{category} ({count} facts)");
            }
        }
    }
}

fn handle_regions(slug: Option<&str>) -> Result<()> {
    match slug {
        Some(slug) => {
            let region = regions::region_by_slug(slug)
                .with_context(|| format!("unknown region slug: {slug}"))?;
            println!("{}\n{}", region.name, region.intro);
        }
        None => {
            for region in regions::REGIONS {
                println!("{:<20} {}", region.slug, region.name);
            }
        }
    }
    Ok(())
}
