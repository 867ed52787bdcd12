//! NEET Seeder CLI - generate and inspect the question bank

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neet_seeder::generator::group_thousands;
use neet_seeder::routes::{build_router, AppState};
use neet_seeder::{Generator, Plan, SqliteStore};

#[derive(Parser)]
#[command(name = "neet-seeder")]
#[command(about = "Bulk NEET question bank generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate questions until every chapter quota or the global target is met
    Generate {
        /// Path to the question bank database
        #[arg(short, long, default_value = "./neet.db")]
        database: PathBuf,

        /// Stop once this many questions exist across all subjects
        #[arg(short, long, default_value_t = neet_seeder::DEFAULT_GLOBAL_TARGET)]
        target: u32,

        /// Questions persisted per batch
        #[arg(short, long, default_value_t = neet_seeder::DEFAULT_BATCH_SIZE)]
        batch_size: u32,

        /// Only generate these subjects (repeatable)
        #[arg(short, long)]
        subject: Vec<String>,
    },

    /// List the questions of one topic
    Questions {
        /// Topic id
        #[arg(short = 'i', long)]
        topic_id: i64,

        /// Path to the question bank database
        #[arg(short, long, default_value = "./neet.db")]
        database: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// List topics with their question counts
    Topics {
        /// Only topics of this subject
        #[arg(short, long)]
        subject: Option<String>,

        /// Path to the question bank database
        #[arg(short, long, default_value = "./neet.db")]
        database: PathBuf,
    },

    /// Show question bank statistics
    Stats {
        /// Path to the question bank database
        #[arg(short, long, default_value = "./neet.db")]
        database: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Serve the read API over HTTP
    Serve {
        /// Path to the question bank database
        #[arg(short, long, default_value = "./neet.db")]
        database: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            database,
            target,
            batch_size,
            subject,
        } => {
            let mut plan = Plan {
                global_target: target,
                batch_size,
                ..Plan::default()
            };
            plan.retain_subjects(&subject)?;
            run_generate(plan, &database)?;
        }

        Commands::Questions {
            topic_id,
            database,
            format,
        } => {
            let store = open_store(&database)?;
            let questions = store.questions_for_topic(topic_id)?;

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                match store.topic(topic_id)? {
                    Some(topic) => println!("\n=== {} / {} ===\n", topic.subject, topic.topic_name),
                    None => println!("\n=== Topic {} (not found) ===\n", topic_id),
                }
                for (i, q) in questions.iter().enumerate() {
                    println!("{}. {} [{}]", i + 1, q.question_text, q.difficulty.label());
                    for option in &q.options {
                        let line = format!("   {}) {}", option.id, option.text);
                        if option.id == q.correct_answer {
                            println!("{}", line.green());
                        } else {
                            println!("{}", line);
                        }
                    }
                    println!();
                }
                println!("{} questions", questions.len());
            }
        }

        Commands::Topics { subject, database } => {
            let store = open_store(&database)?;
            let topics = store.topics(subject.as_deref())?;

            println!("\n=== Topics ===");
            for t in &topics {
                println!(
                    "{:>5}  {:<10} {:<12} {:>6} questions",
                    t.topic.id, t.topic.subject, t.topic.topic_name, t.question_count
                );
            }
            println!("Total topics: {}", topics.len());
        }

        Commands::Stats { database, format } => {
            let store = open_store(&database)?;
            let stats = store.stats()?;

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("\n{}", "=== Question Bank Statistics ===".bold());
                println!("Total questions: {}", group_thousands(stats.total).cyan());
                println!("\nBy subject:");
                for (subject, count) in &stats.by_subject {
                    println!("  {:<10} {:>8}", subject, group_thousands(*count));
                }
                println!("\nBy difficulty:");
                for (label, count) in &stats.by_difficulty {
                    let label = match label.as_str() {
                        "easy" => label.green(),
                        "medium" => label.yellow(),
                        _ => label.red(),
                    };
                    println!("  {:<10} {:>8}", label, group_thousands(*count));
                }
            }
        }

        Commands::Serve { database, port } => {
            let store = open_store(&database)?;
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(serve(store, port))?;
        }
    }

    Ok(())
}

fn open_store(database: &Path) -> Result<SqliteStore> {
    SqliteStore::open(database).with_context(|| format!("Failed to open database {:?}", database))
}

fn run_generate(plan: Plan, database: &Path) -> Result<()> {
    tracing::info!("Opening question bank at {:?}", database);
    let mut store = open_store(database)?;

    let generator = Generator::new(plan)?.with_progress_bar();
    let report = generator.run(&mut store).context("Generation aborted")?;

    println!();
    println!("Questions generated: {}", group_thousands(report.generated));
    println!("Questions in plan:   {}", group_thousands(report.total));
    println!("Sets persisted:      {}", report.batches);
    println!("Chapters skipped:    {}", report.chapters_skipped);
    if report.target_reached {
        println!("{}", "Global target reached".green());
    }

    Ok(())
}

async fn serve(store: SqliteStore, port: u16) -> Result<()> {
    let app = build_router(AppState::new(store));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
