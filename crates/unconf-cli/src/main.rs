//! `unconf` CLI — generate event slugs and check unconference schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Print a slug
//! unconf slug
//!
//! # Print a slug not already listed in a file (one slug per line)
//! unconf slug --unique --existing slugs.txt
//!
//! # Validate or sanitize a custom slug
//! unconf slug --check tech-valley
//! unconf slug --sanitize "Rust Meetup, Berlin!"
//!
//! # Annotate time blocks (stdin → stdout)
//! echo '[{"startTime":"09:00","endTime":"10:00"}]' | unconf conflicts
//!
//! # Fail when any blocks overlap
//! unconf conflicts --strict -i blocks.json
//!
//! # Duration between two wall-clock times
//! unconf duration 09:00 10:30
//!
//! # Suggest the next block, or list common slots
//! unconf suggest -i blocks.json
//! unconf suggest --common
//!
//! # Validate a full event draft
//! unconf validate -i event.json --today 2026-03-01
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::collections::HashSet;
use std::convert::Infallible;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unconf_engine::conflict::has_any_conflict;
use unconf_engine::event::EventDraft;
use unconf_engine::schedule::{suggest_next_block, COMMON_TIME_SLOTS};
use unconf_engine::short_id::{generate_short_id, generate_unique_short_id};
use unconf_engine::slug::DEFAULT_MAX_ATTEMPTS;
use unconf_engine::{
    calculate_duration, detect_conflicts, find_overlaps, generate_slug, generate_unique_slug,
    is_valid_slug, sanitize_slug, TimeBlock,
};

#[derive(Parser)]
#[command(
    name = "unconf",
    version,
    about = "Event slugs and time-block checks for unconference organizers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, check or sanitize event slugs
    Slug {
        /// Number of slugs to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Avoid slugs listed in the --existing file
        #[arg(long, requires = "existing")]
        unique: bool,
        /// File of slugs already in use, one per line (requires --unique)
        #[arg(long, requires = "unique")]
        existing: Option<String>,
        /// Attempts before falling back to a numeric suffix
        #[arg(long, env = "UNCONF_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
        /// Check whether the given string is a valid slug
        #[arg(long, conflicts_with_all = ["sanitize", "unique"])]
        check: Option<String>,
        /// Turn the given text into slug shape
        #[arg(long, conflicts_with = "unique")]
        sanitize: Option<String>,
    },
    /// Generate a six-character short id
    ShortId {
        /// File of ids already in use, one per line
        #[arg(long)]
        existing: Option<String>,
        /// Attempts before giving up
        #[arg(long, env = "UNCONF_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
    /// Annotate overlapping time blocks in a JSON array of {startTime, endTime}
    Conflicts {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print every overlapping pair instead of per-block annotations
        #[arg(long)]
        overlaps: bool,
        /// Exit with an error if any blocks overlap
        #[arg(long)]
        strict: bool,
    },
    /// Print the duration between two HH:MM times
    Duration { start: String, end: String },
    /// Suggest the next time block for a schedule
    Suggest {
        /// Input file with the current blocks (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// List common unconference slots instead
        #[arg(long)]
        common: bool,
    },
    /// Validate an event draft (details, rooms and time blocks)
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to treat as today (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Slug {
            count,
            unique,
            existing,
            max_attempts,
            check,
            sanitize,
        } => {
            if let Some(candidate) = check {
                if !is_valid_slug(&candidate) {
                    anyhow::bail!(
                        "'{}' is not a valid slug (3-50 chars of a-z, 0-9 and '-')",
                        candidate
                    );
                }
                println!("valid");
                return Ok(());
            }
            if let Some(text) = sanitize {
                println!("{}", sanitize_slug(&text));
                return Ok(());
            }

            let mut taken = match existing.as_deref() {
                Some(path) if unique => Some(read_existing(path)?),
                _ => None,
            };
            for _ in 0..count {
                let slug = match taken.as_mut() {
                    Some(taken) => {
                        let slug = generate_unique_slug(
                            |candidate| {
                                let exists = taken.contains(candidate);
                                async move { Ok::<_, Infallible>(exists) }
                            },
                            max_attempts,
                        )
                        .await?;
                        taken.insert(slug.clone());
                        slug
                    }
                    None => generate_slug(),
                };
                println!("{}", slug);
            }
        }
        Commands::ShortId {
            existing,
            max_attempts,
        } => {
            let short_id = match existing.as_deref() {
                Some(path) => {
                    let taken = read_existing(path)?;
                    generate_unique_short_id(
                        |candidate| {
                            let exists = taken.contains(candidate);
                            async move { Ok::<_, Infallible>(exists) }
                        },
                        max_attempts,
                    )
                    .await?
                }
                None => generate_short_id(),
            };
            println!("{}", short_id);
        }
        Commands::Conflicts {
            input,
            overlaps,
            strict,
        } => {
            let blocks = read_blocks(input.as_deref())?;
            let statuses = detect_conflicts(&blocks);

            let report = if overlaps {
                serde_json::to_string_pretty(&find_overlaps(&blocks))?
            } else {
                serde_json::to_string_pretty(&statuses)?
            };
            println!("{}", report);

            if strict && has_any_conflict(&statuses) {
                let count = statuses.iter().filter(|s| s.has_conflict).count();
                anyhow::bail!("{} of {} time blocks overlap", count, blocks.len());
            }
        }
        Commands::Duration { start, end } => {
            let duration = calculate_duration(&start, &end);
            if duration.is_empty() {
                anyhow::bail!(
                    "No positive duration between '{}' and '{}' (expected HH:MM with end after start)",
                    start,
                    end
                );
            }
            println!("{}", duration);
        }
        Commands::Suggest { input, common } => {
            if common {
                println!("{}", serde_json::to_string_pretty(&COMMON_TIME_SLOTS)?);
                return Ok(());
            }
            let blocks = read_blocks(input.as_deref())?;
            match suggest_next_block(&blocks) {
                Some(block) => println!("{}", serde_json::to_string_pretty(&block)?),
                None => anyhow::bail!("Schedule is full; no more time blocks can be added"),
            }
        }
        Commands::Validate { input, today } => {
            let raw = read_input(input.as_deref())?;
            let draft: EventDraft =
                serde_json::from_str(&raw).context("Failed to parse event draft JSON")?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let event = draft.validate(today).context("Event draft rejected")?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

fn read_blocks(path: Option<&str>) -> Result<Vec<TimeBlock>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse time blocks JSON")
}

/// Read a newline-separated list of identifiers already in use.
fn read_existing(path: &str) -> Result<HashSet<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read existing ids: {}", path))?;
    let taken: HashSet<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!(path, count = taken.len(), "loaded existing ids");
    Ok(taken)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
