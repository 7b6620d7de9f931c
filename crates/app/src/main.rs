use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use tracing_subscriber::EnvFilter;

use services::{AttemptService, build_part_series, build_trend, question_type_stats};
use storage::{CsvStore, RecordStore};
use tracker_core::config::TrackerConfig;
use tracker_core::model::{AttemptDraft, Module, Part, TestRef};

#[derive(Parser, Debug)]
#[command(author, version, about = "IELTS practice tracker", long_about = None)]
struct Cli {
    /// CSV store path (defaults to ielts_progress.csv)
    #[arg(long, value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a practice attempt
    Add(AddArgs),
    /// List recorded attempts
    List,
    /// Delete an attempt by its list position
    Delete {
        /// Zero-based position as shown by `list`
        index: usize,
    },
    /// Print the overall band-score trend for a module
    Trend {
        /// Listening or Reading
        module: Module,
    },
    /// Print the Listening per-part score series
    Parts,
    /// Print the question-type statistics table
    Stats,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Book number (e.g. 15)
    #[arg(long)]
    book: u32,

    /// Test number within the book (1-4)
    #[arg(long)]
    test: u32,

    /// Listening or Reading
    #[arg(long)]
    module: Module,

    /// Part number, Listening only (1-4)
    #[arg(long)]
    part: Option<Part>,

    /// Question type, from the module's vocabulary
    #[arg(long = "type")]
    question_type: String,

    /// Total questions in this slice
    #[arg(long)]
    total: u32,

    /// Correct answers
    #[arg(long)]
    correct: u32,

    /// Minutes spent, Reading only
    #[arg(long)]
    minutes: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = cli
        .file
        .unwrap_or_else(|| TrackerConfig::default().csv_path);
    tracing::debug!(path = %path.display(), "using record store");
    let store: Arc<dyn RecordStore> = Arc::new(CsvStore::new(path));

    match cli.command {
        Command::Add(args) => add(&store, args),
        Command::List => list(&store),
        Command::Delete { index } => delete(&store, index),
        Command::Trend { module } => trend(&store, module),
        Command::Parts => parts(&store),
        Command::Stats => stats(&store),
    }
}

fn add(store: &Arc<dyn RecordStore>, args: AddArgs) -> Result<()> {
    let draft = AttemptDraft {
        test: TestRef::new(args.book, args.test),
        module: args.module,
        part: args.part,
        question_type: args.question_type,
        total_questions: args.total,
        correct: args.correct,
        minutes: args.minutes,
    };

    let service = AttemptService::new(Arc::clone(store));
    let record = service.add(draft).context("failed to record attempt")?;
    println!(
        "recorded {} {} {}/{}",
        record.test(),
        record.module(),
        record.correct(),
        record.total_questions()
    );
    Ok(())
}

fn list(store: &Arc<dyn RecordStore>) -> Result<()> {
    let service = AttemptService::new(Arc::clone(store));
    let lines = service.summaries().context("failed to load attempts")?;
    if lines.is_empty() {
        println!("no attempts recorded");
        return Ok(());
    }
    for (index, line) in lines.iter().enumerate() {
        println!("{index:>3}  {line}");
    }
    Ok(())
}

fn delete(store: &Arc<dyn RecordStore>, index: usize) -> Result<()> {
    let service = AttemptService::new(Arc::clone(store));
    service.delete(index).context("failed to delete attempt")?;
    println!("deleted attempt {index}");
    Ok(())
}

fn trend(store: &Arc<dyn RecordStore>, module: Module) -> Result<()> {
    let records = store.load().context("failed to load attempts")?;
    let series = build_trend(&records, module);
    if series.is_empty() {
        println!("no {module} data");
        return Ok(());
    }

    println!("{module} overall band scores");
    for point in &series.points {
        println!(
            "{:<8} band {:<4} (hour {:02})",
            point.test.to_string(),
            point.band,
            point.hour
        );
    }
    println!("average band {:.2}", series.average);
    Ok(())
}

fn parts(store: &Arc<dyn RecordStore>) -> Result<()> {
    let records = store.load().context("failed to load attempts")?;
    let set = build_part_series(&records);
    if set.is_empty() {
        println!("no Listening data");
        return Ok(());
    }

    print!("{:<8}", "test");
    for series in &set.series {
        print!("{:>8}", format!("part {}", series.part));
    }
    println!();

    for (column, test) in set.tests.iter().enumerate() {
        print!("{:<8}", test.to_string());
        for series in &set.series {
            match series.points[column] {
                Some(score) => print!("{score:>8.1}"),
                None => print!("{:>8}", "-"),
            }
        }
        println!();
    }
    Ok(())
}

fn stats(store: &Arc<dyn RecordStore>) -> Result<()> {
    let records = store.load().context("failed to load attempts")?;
    let rows = question_type_stats(&records);
    if rows.is_empty() {
        println!("no data");
        return Ok(());
    }

    println!(
        "{:<10} {:<42} {:>7} {:>6} {:>10} {:>9}",
        "module", "question type", "correct", "total", "accuracy", "avg time"
    );
    for row in &rows {
        let qtype = match row.part {
            Some(part) => format!("{} Part {part}", row.question_type),
            None => row.question_type.clone(),
        };
        let avg_time = row
            .avg_time
            .map_or_else(|| "-".to_string(), |t| format!("{t:.2}"));
        println!(
            "{:<10} {:<42} {:>7} {:>6} {:>9.1}% {:>9}",
            row.module.to_string(),
            qtype,
            row.correct,
            row.total,
            row.accuracy,
            avg_time
        );
    }
    Ok(())
}
