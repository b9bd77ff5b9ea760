//! Eagle Results CLI
//!
//! Command-line interface for the results portal:
//! - Check a dataset
//! - Sign in as a student
//! - Show a student's results
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use eagle_results::config::{generate_default_config, Config};
use eagle_results::dataset::{source_for, DatasetLoader};
use eagle_results::login::{Credentials, LoginPacing, LoginSession};
use eagle_results::results::{
    CelebrationCue, CelebrationLatch, CueError, GradeTier, ResultsState, ResultsView,
};
use eagle_results::router::RouteStudentId;
use eagle_results::telemetry;

#[derive(Parser)]
#[command(name = "eagle-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Eagle Series exam results from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset file path or URL (default: from config)
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the dataset
    Check,

    /// Sign in with a student's name and password
    Login {
        /// Full name, any letter case
        #[arg(short, long)]
        name: String,
        /// Password, case-sensitive
        #[arg(short, long)]
        password: String,
        /// Skip the submit and redirect delays
        #[arg(long)]
        no_delay: bool,
    },

    /// Show results for a student id
    Results {
        /// Student id as it appears in /results/{id}
        student_id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Rings the terminal bell
struct TerminalCue;

impl CelebrationCue for TerminalCue {
    fn play(&self) -> Result<(), CueError> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| CueError(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default(cli.config.as_deref())?;
    if let Some(location) = &cli.dataset {
        config.dataset.location = location.clone();
    }

    // Keep stdout clean for output
    if std::env::var_os("RUST_LOG").is_none() {
        config.logging.level = "warn".to_string();
    }
    telemetry::init(&config.logging);

    let loader = DatasetLoader::with_policy(
        source_for(&config.dataset.location),
        config.dataset.policy,
    );

    match cli.command {
        Commands::Check => {
            let dataset = loader
                .load()
                .await
                .with_context(|| format!("Cannot load dataset from {}", loader.describe()))?;

            if cli.format == "json" {
                let summary = serde_json::json!({
                    "source": loader.describe(),
                    "exam": dataset.exam.title,
                    "total_marks": dataset.exam.total_marks,
                    "students": dataset.len(),
                    "tiers": tier_counts(&dataset.students),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Dataset: {}", loader.describe());
                println!();
                println!("Exam:        {}", dataset.exam.title);
                println!("Total marks: {}", dataset.exam.total_marks);
                println!("Pass mark:   {}%", dataset.exam.pass_percentage);
                println!("Students:    {}", dataset.len());
                println!();
                println!("{:<8} {}", "Tier", "Students");
                println!("{}", "-".repeat(20));
                for (tier, count) in tier_counts(&dataset.students) {
                    println!("{:<8} {}", tier, count);
                }
            }
        }

        Commands::Login {
            name,
            password,
            no_delay,
        } => {
            let pacing = if no_delay {
                LoginPacing::none()
            } else {
                config.login.pacing()
            };

            let mut session = LoginSession::mount(&loader, pacing).await;
            if let Some(message) = session.mount_error() {
                eprintln!("{}", message);
                std::process::exit(1);
            }

            if !no_delay {
                eprintln!("Logging in...");
            }

            match session.submit(Credentials::new(name, password)).await {
                Ok(route) => {
                    if cli.format == "json" {
                        let body = serde_json::json!({
                            "student_id": route.student_id().map(|id| id.value()),
                            "redirect": route.path(),
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    } else {
                        println!("Login successful! Redirecting...");
                        println!("{}", route);
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Results { student_id } => {
            let loaded = loader.load().await;
            let state = ResultsState::resolve(loaded.as_deref(), RouteStudentId::parse(&student_id));

            let Some(view) = state.view() else {
                eprintln!("{}", state.error_message().unwrap_or_default());
                eprintln!("Back to login: {}", state.back_route());
                std::process::exit(1);
            };

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(view)?);
            } else {
                print_results(view);
            }

            CelebrationLatch::new().fire(view, &TerminalCue);
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn tier_counts(students: &[eagle_results::Student]) -> Vec<(GradeTier, usize)> {
    GradeTier::all()
        .iter()
        .map(|tier| {
            let count = students
                .iter()
                .filter(|s| GradeTier::resolve(&s.grade) == *tier)
                .count();
            (*tier, count)
        })
        .collect()
}

fn print_results(view: &ResultsView) {
    println!("{}", view.exam_title);
    println!("{}", "=".repeat(view.exam_title.chars().count().max(20)));
    println!();
    println!("Student:    {}", view.student_name);
    println!("Score:      {}", view.score_label);
    println!("Percentage: {}", view.percentage_label);
    println!("Grade:      {}", view.badge.text());

    if let Some(notes) = &view.notes {
        println!();
        println!("Teacher's notes:");
        println!("  {}", notes);
    }

    if view.certificate {
        println!();
        println!("🏆 Certificate of Excellence awarded");
    }

    println!();
    println!("Downloads:");
    for download in &view.downloads {
        println!("  {:<32} {}", download.label, download.url);
    }

    if !view.announcements.is_empty() {
        println!();
        println!("Announcements:");
        for note in &view.announcements {
            println!("  - {}", note);
        }
    }
}
