//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tutorgen_core::{Depth, Mode};
use tutorgen_models::ImageBackend;

/// Generate AI/ML lessons with code, narration, or illustrations.
#[derive(Parser, Debug)]
#[command(name = "tutorgen")]
#[command(about = "Educational ML content generator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./tutorgen.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explain a topic
    Explain(ExplainArgs),
}

/// Arguments for `tutorgen explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Topic to explain
    #[arg(short, long)]
    pub topic: String,

    /// Explanation depth: brief, detailed, comprehensive
    #[arg(short, long, default_value = "detailed")]
    pub depth: Depth,

    /// Output mode: text, code, audio, image
    #[arg(short, long, default_value = "text")]
    pub mode: Mode,

    /// Image backend override: gemini, huggingface
    #[arg(long)]
    pub image_backend: Option<ImageBackend>,

    /// Directory to write decoded images into
    #[arg(long)]
    pub image_dir: Option<PathBuf>,

    /// Directory to save generated code into (overrides `[code] output_dir`)
    #[arg(long)]
    pub code_dir: Option<PathBuf>,

    /// Print the lesson as JSON
    #[arg(long)]
    pub json: bool,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Hugging Face API key, needed for the huggingface image backend
    #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
    pub hf_api_key: Option<String>,
}
