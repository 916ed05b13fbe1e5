//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

/// TripStory - trip planning client
#[derive(Parser, Debug)]
#[command(
    name = "tp",
    author,
    version,
    about = "Request a trip itinerary and render it as day chapters with map markers"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Backend base URL, overriding the config file
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a trip form and render the returned plan
    Plan {
        #[command(flatten)]
        form: FormArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a saved plan response without contacting the backend
    Render {
        /// JSON file holding a plan response
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive session: edit the form, pick themes, submit repeatedly
    Interactive,

    /// List travel style themes
    Themes,

    /// Fetch narration audio for one chapter
    Narrate {
        /// Chapter id
        #[arg(long)]
        chapter: u32,

        /// Text to narrate
        #[arg(long)]
        text: String,

        /// File to write the audio to
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Trip form fields, taken as raw text like the input widgets
#[derive(Debug, Clone, clap::Args)]
pub struct FormArgs {
    /// Destination
    #[arg(short, long)]
    pub destination: String,

    /// Trip length in days; anything but a positive integer means 3
    #[arg(long, default_value = "", hide_default_value = true)]
    pub duration: String,

    /// Budget category
    #[arg(short, long, default_value = "")]
    pub budget: String,

    /// Travel style theme
    #[arg(short, long)]
    pub style: Option<String>,

    /// Comma-separated interests
    #[arg(short, long, default_value = "")]
    pub interests: String,

    /// Include restaurant suggestions
    #[arg(long)]
    pub eat_out: bool,

    /// Starting point
    #[arg(long)]
    pub origin: Option<String>,

    /// First day of the trip
    #[arg(long)]
    pub start_date: Option<String>,
}

/// Where and how to write a rendered story
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
