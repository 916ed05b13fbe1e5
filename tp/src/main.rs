//! TripStory - trip planning client
//!
//! CLI entry point: submit a trip form, render saved plans, or run the
//! interactive session.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripstory::cli::{Cli, Command, FormArgs, OutputArgs};
use tripstory::config::Config;
use tripstory::render::{PlanRenderer, StoryDocument, present};
use tripstory::{FormState, InputCollector, TripPlan, repl};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripstory")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("tripstory.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    config.validate()?;

    info!("TripStory loaded config: server={}", config.server.base_url);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan { form, output } => cmd_plan(&config, form, &output).await,
        Command::Render { file, output } => cmd_render(&config, &file, &output),
        Command::Interactive => repl::run_interactive(&config).await,
        Command::Themes => cmd_themes(&config),
        Command::Narrate { chapter, text, output } => cmd_narrate(&config, chapter, &text, &output).await,
    }
}

async fn cmd_plan(config: &Config, args: FormArgs, output: &OutputArgs) -> Result<()> {
    let mut themes = config.themes.selector().map_err(|e| eyre::eyre!(e))?;
    if let Some(style) = &args.style {
        themes.click(style).map_err(|e| eyre::eyre!(e))?;
    }

    let mut form = FormState::new(themes);
    form.destination = args.destination;
    form.duration = args.duration;
    form.budget = args.budget;
    form.interests = args.interests;
    form.eat_out = args.eat_out;
    form.origin = args.origin.unwrap_or_default();
    form.start_date = args.start_date.unwrap_or_default();

    let collector = InputCollector::from_config(&config.server)?;
    let submission = collector.submit(&form).await?;

    render_and_write(config, &submission.plan, output)
}

fn cmd_render(config: &Config, file: &Path, output: &OutputArgs) -> Result<()> {
    let body = fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let plan = TripPlan::from_json(&body)?;
    render_and_write(config, &plan, output)
}

fn render_and_write(config: &Config, plan: &TripPlan, output: &OutputArgs) -> Result<()> {
    let mut renderer = PlanRenderer::new(config.map.clone());
    let mut document = StoryDocument::default();
    renderer.render(plan, &mut document);

    let text = present(output.format, &document, renderer.context())?;
    match &output.output {
        Some(path) => {
            fs::write(path, text).context(format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn cmd_themes(config: &Config) -> Result<()> {
    for style in &config.themes.styles {
        if *style == config.themes.default {
            println!("{} {}", style.cyan(), "(default)".dimmed());
        } else {
            println!("{}", style);
        }
    }
    Ok(())
}

async fn cmd_narrate(config: &Config, chapter: u32, text: &str, output: &Path) -> Result<()> {
    let collector = InputCollector::from_config(&config.server)?;
    let audio = collector.narrate(chapter, text).await?;
    fs::write(output, &audio).context(format!("Failed to write {}", output.display()))?;
    println!("{} Wrote {} bytes to {}", "✓".green(), audio.len(), output.display());
    Ok(())
}
