use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scholar",
    version,
    about = "Find the top scientists in a research field, then judge the list with a second model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a numbered list of influential scientists for a topic
    Find(FindArgs),
    /// Judge candidate text against the topic rubric
    Judge(JudgeArgs),
    /// Generate, optionally hand-edit, then judge in one flow
    Run(RunArgs),
    Version,
}

#[derive(Args)]
pub struct CommonArgs {
    /// OpenRouter API key (required before any model call)
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional YAML config file (models, endpoint, threshold, search)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Research topic, e.g. "Generative Adversarial Networks"
    #[arg(long)]
    pub topic: String,

    /// Override the finder model identifier
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args)]
pub struct JudgeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Research topic the candidate list is judged against
    #[arg(long)]
    pub topic: String,

    /// Candidate text to judge (defaults to stdin when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the candidate text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Override the pass/fail threshold (score must be strictly greater)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Override the judge model identifier
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Research topic
    #[arg(long)]
    pub topic: String,

    /// Open $EDITOR on the generated list before judging
    #[arg(long)]
    pub edit: bool,

    /// Override the pass/fail threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}
