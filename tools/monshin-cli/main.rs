use clap::Parser;
use monshin::prelude::*;
use std::fs;
use std::process;
use std::str::FromStr;

/// Inspect what the question engine would ask for a given business profile.
#[derive(Parser, Debug)]
#[command(name = "monshin-cli", version, about)]
struct Args {
    /// Path to a profile JSON document (flat or nested; nested objects are
    /// flattened into dot paths). Omit for an empty profile.
    #[arg(short, long)]
    profile: Option<String>,

    /// Onboarding mode: quick or full.
    #[arg(short, long, default_value = "quick")]
    mode: String,

    /// Business category; unknown categories fall back to the default vertical.
    #[arg(short, long, default_value = "gastro")]
    category: String,

    /// Language for question copy.
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Country for dynamic option sources.
    #[arg(long, default_value = "US")]
    country: String,

    /// Print the per-area score breakdown as well.
    #[arg(long)]
    breakdown: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mode = Mode::from_str(&args.mode)?;

    let profile = match &args.profile {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let document: serde_json::Value = serde_json::from_str(&content)?;
            BusinessProfile::from_json(document)?
        }
        None => BusinessProfile::new(),
    };

    let engine = QuestionEngine::standard();
    let questions =
        engine.localized_questions(mode, &profile, &args.category, &args.lang, &args.country);
    let score = engine.precision_score(&profile, mode, &args.category);

    println!(
        "{} active questions for category '{}' in {} mode:",
        questions.len(),
        args.category,
        mode
    );
    for question in &questions {
        let answered = if profile.is_answered(&question.store_path) {
            "answered"
        } else {
            "open"
        };
        println!("  [{}] {} ({})", question.step, question.title, answered);
    }
    println!("Precision score: {}%", score);

    if args.breakdown {
        for area in engine.score_breakdown(&profile, mode, &args.category) {
            println!(
                "  {}: {}/{} ({}%)",
                area.area,
                area.answered,
                area.total,
                area.percent()
            );
        }
    }

    Ok(())
}
