use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use studymap_catalog::{builtin, check_consistency, ProblemFilter};
use studymap_core::{Difficulty, Problem, StudymapError};
use studymap_graph::PrereqGraph;
use studymap_progress::{JsonFileStore, ProgressTracker};
use tracing_subscriber::EnvFilter;

/// Interview-prep roadmap over the built-in pattern catalog.
#[derive(Parser, Debug)]
#[command(name = "studymap", about = "Browse coding patterns, track progress, follow the roadmap")]
struct Cli {
    /// Path of the completion-set file (defaults under the platform data dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List patterns with tier, effort, and completion
    Patterns,
    /// List problems, optionally filtered
    Problems {
        /// Filter by difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<String>,
        /// Filter by pattern id
        #[arg(long)]
        pattern: Option<String>,
        /// Case-insensitive substring of the title or pattern name
        #[arg(long)]
        query: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the prerequisite roadmap in learning order
    Roadmap,
    /// Flip completion state of a problem
    Toggle { problem_id: String },
    /// Overall and per-pattern completion percentages
    Stats,
    /// Report drift between pattern caches and problem memberships
    Check,
}

fn store_path(cli: &Cli) -> PathBuf {
    cli.store.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studymap")
            .join("completedProblems.json")
    })
}

fn difficulty_colored(difficulty: Difficulty) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => "Easy".green(),
        Difficulty::Medium => "Medium".yellow(),
        Difficulty::Hard => "Hard".red(),
    }
}

fn print_problem(problem: &Problem, tracker: &ProgressTracker) {
    let mark = if tracker.is_completed(&problem.id) {
        "✓".green()
    } else {
        " ".normal()
    };
    println!(
        "[{}] {:<40} {:<8} {}",
        mark,
        problem.title,
        difficulty_colored(problem.difficulty),
        problem.patterns.join(", ").dimmed()
    );
}

fn run(cli: Cli) -> Result<()> {
    let catalog = builtin::catalog();
    let graph = PrereqGraph::build(catalog.pattern_ids(), &builtin::prerequisite_edges())
        .context("built-in roadmap failed validation")?;
    let path = store_path(&cli);
    tracing::debug!(store = %path.display(), "assembling studymap");
    let store = JsonFileStore::new(path);
    let mut tracker = ProgressTracker::with_loaded(Box::new(store));

    match cli.command {
        Commands::Patterns => {
            for pattern in catalog.patterns() {
                let count = catalog.problem_count_for_pattern(&pattern.id)?;
                let percent = tracker.pattern_percent(catalog, &pattern.id)?;
                println!(
                    "{:<24} {:<12} {:>2}h  {:>2} problems  {:>3}%",
                    pattern.id.bold(),
                    pattern.tier.to_string(),
                    pattern.estimated_hours,
                    count,
                    percent
                );
            }
        }
        Commands::Problems {
            difficulty,
            pattern,
            query,
            json,
        } => {
            let mut filter = ProblemFilter::new();
            if let Some(raw) = difficulty {
                let parsed = raw
                    .parse::<Difficulty>()
                    .map_err(|e| anyhow!(e))?;
                filter = filter.with_difficulty(parsed);
            }
            if let Some(pattern) = pattern {
                filter = filter.with_pattern(pattern);
            }
            if let Some(query) = query {
                filter = filter.with_text(query);
            }
            let hits = catalog.find_problems(&filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                for problem in hits {
                    print_problem(problem, &tracker);
                }
            }
        }
        Commands::Roadmap => {
            let completed_patterns = tracker.completed_patterns(catalog);
            let unlocked = graph.unlocked_patterns(&completed_patterns);
            for pattern_id in graph.topological_order() {
                let mut prereqs: Vec<String> =
                    graph.prerequisites_of(&pattern_id)?.into_iter().collect();
                prereqs.sort();
                let state = if completed_patterns.contains(&pattern_id) {
                    "done".green()
                } else if unlocked.contains(&pattern_id) {
                    "unlocked".cyan()
                } else {
                    "locked".dimmed()
                };
                let requires = if prereqs.is_empty() {
                    "start here".to_string()
                } else {
                    format!("requires {}", prereqs.join(", "))
                };
                println!("{:<24} [{}] {}", pattern_id.bold(), state, requires.dimmed());
            }
        }
        Commands::Toggle { problem_id } => {
            let title = match catalog.problem(&problem_id) {
                Ok(problem) => problem.title.clone(),
                // The tracker accepts ids the catalog does not know; warn
                // but proceed, matching its contract.
                Err(_) => {
                    eprintln!("{}", format!("note: '{problem_id}' is not in the catalog").yellow());
                    problem_id.clone()
                }
            };
            let now = tracker.toggle_completed(&problem_id);
            if now {
                println!("{} {}", "completed".green(), title);
            } else {
                println!("{} {}", "reopened".yellow(), title);
            }
        }
        Commands::Stats => {
            println!("overall: {}%", tracker.overall_percent(catalog));
            for pattern in catalog.patterns() {
                let percent = tracker.pattern_percent(catalog, &pattern.id)?;
                let done = tracker
                    .completed_in(catalog.problem_ids_for_pattern(&pattern.id)?);
                let total = catalog.problem_count_for_pattern(&pattern.id)?;
                println!("{:<24} {:>3}%  ({}/{})", pattern.id, percent, done, total);
            }
        }
        Commands::Check => {
            let drift = check_consistency(catalog);
            if drift.is_empty() {
                println!("pattern caches agree with problem memberships");
            } else {
                for entry in &drift {
                    println!("{}", entry);
                }
                return Err(anyhow!("{} inconsistencies found", drift.len()));
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Unknown-id lookups render as a plain not-found line rather than a
        // crash; everything else is surfaced as-is.
        match err.downcast_ref::<StudymapError>() {
            Some(StudymapError::PatternNotFound(id)) => {
                eprintln!("{}", format!("pattern '{id}' not found").red());
            }
            Some(StudymapError::ProblemNotFound(id)) => {
                eprintln!("{}", format!("problem '{id}' not found").red());
            }
            _ => eprintln!("{} {err:#}", "error:".red()),
        }
        std::process::exit(1);
    }
}
