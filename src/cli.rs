use clap::{Parser, Subcommand, ValueEnum};

use reference_analyzer::analysis::DEFAULT_LATENCY;

#[derive(Parser)]
#[command(name = "reference-analyzer")]
#[command(about = "Search and analyze academic references with category, type, and keyword filters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one analysis and print the matching references
    Search(SearchArgs),

    /// Match every filter request in a JSONL file (in parallel) and write one result line per request
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON array of matching references
    Json,
}

#[derive(Parser, Clone)]
pub struct SearchArgs {
    /// Category to match exactly (technology, health, finance, education, environment)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Reference type to match exactly (article, report, case-study, book, conference)
    #[arg(long = "type", default_value = "")]
    pub reference_type: String,

    /// Publication period (last-month, last-3-months, last-6-months, last-year, all-time); accepted but not applied
    #[arg(long, default_value = "")]
    pub date_range: String,

    /// Comma-separated keywords; a reference matches if any keyword appears in its title or abstract
    #[arg(short, long, default_value = "")]
    pub keywords: String,

    /// Source database (pubmed, arxiv, google-scholar, ieee, nature); accepted but not applied
    #[arg(long, default_value = "")]
    pub source: String,

    /// References file (.json, .jsonl, or .jsonl.gz); the built-in sample is used when omitted
    #[arg(short, long)]
    pub references: Option<String>,

    /// Simulated search latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_LATENCY.as_millis() as u64)]
    pub latency_ms: u64,

    /// Output format written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the matching references to this JSON file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct BatchArgs {
    /// JSONL file with one filter request object per line
    #[arg(short, long, required = true)]
    pub input: String,

    /// References file (.json, .jsonl, or .jsonl.gz); the built-in sample is used when omitted
    #[arg(short, long)]
    pub references: Option<String>,

    /// Output JSONL file with one result line per request
    #[arg(short, long, default_value = "batch_results.jsonl")]
    pub output: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
