//! nlpiffy command line
//!
//! ```bash
//! echo "Cats are mammals. Dogs are mammals too." | nlpiffy tokens
//! nlpiffy --format json entities --text "Dr. Jane Smith visited Paris."
//! nlpiffy summarize --summarizer lexrank < article.txt
//! RUST_LOG=nlpiffy=debug nlpiffy --config nlpiffy.json summarize < article.txt
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use nlpiffy::{Analyzer, AnalyzerConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every token with its lemma
    Tokens(Input),
    /// Print tokens and named entities
    Entities(Input),
    /// Print polarity and subjectivity
    Sentiment(Input),
    /// Print an extractive summary
    Summarize {
        #[command(flatten)]
        input: Input,

        /// Strategy name (textrank, lexrank); unknown names use the default
        #[arg(long)]
        summarizer: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Text to analyze; read from stdin when omitted
    #[arg(long)]
    text: Option<String>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read text from stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = Analyzer::from_config(&config)?;
    let format = args.format;

    match &args.command {
        Command::Tokens(input) => {
            let pairs = analyzer.tokens_and_lemmas(&input.read()?);
            if format == Format::Json {
                return print_json(&pairs);
            }
            for pair in &pairs {
                println!("{}\t{}", pair.token, pair.lemma);
            }
        }
        Command::Entities(input) => {
            let analysis = analyzer.entities(&input.read()?);
            if format == Format::Json {
                return print_json(&analysis);
            }
            println!("{}", analysis.tokens.join(" "));
            for entity in &analysis.entities {
                println!("{}\t{}", entity.text, entity.label);
            }
        }
        Command::Sentiment(input) => {
            let sentiment = analyzer.sentiment(&input.read()?);
            if format == Format::Json {
                return print_json(&sentiment);
            }
            println!("polarity: {:.4}", sentiment.polarity);
            println!("subjectivity: {:.4}", sentiment.subjectivity);
        }
        Command::Summarize { input, summarizer } => {
            let outcome = analyzer.summarize_detailed(&input.read()?, summarizer.as_deref())?;
            if format == Format::Json {
                return print_json(&outcome);
            }
            if outcome.fell_back {
                println!("Using default summarizer");
            }
            println!("{}", outcome.summary);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
