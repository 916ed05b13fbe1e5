//! REPL session state and command handling

use std::path::{Path, PathBuf};

use colored::*;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::collector::InputCollector;
use crate::domain::{FIELD_NAMES, FormState};
use crate::error::PlanError;
use crate::render::{OutputFormat, PlanRenderer, StoryDocument, present};

/// Result of handling a command
#[derive(Debug, PartialEq, Eq)]
pub enum SlashResult {
    Continue,
    Quit,
}

/// One form, one theme group and one renderer shared by every submission
pub struct ReplSession {
    collector: InputCollector,
    form: FormState,
    renderer: PlanRenderer,
    document: StoryDocument,
    format: OutputFormat,
}

impl ReplSession {
    pub fn new(collector: InputCollector, form: FormState, renderer: PlanRenderer) -> Self {
        Self {
            collector,
            form,
            renderer,
            document: StoryDocument::default(),
            format: OutputFormat::Text,
        }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if self.handle_line(input).await? == SlashResult::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Handle one input line
    pub async fn handle_line(&mut self, input: &str) -> Result<SlashResult> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        debug!(%cmd, %rest, "handle_line: called");

        match cmd {
            "/help" | "/h" => self.print_help(),
            "/quit" | "/q" | "/exit" => return Ok(SlashResult::Quit),
            "/set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match self.form.set_field(field, value.trim()) {
                    Ok(()) => println!("{} {} = {}", "✓".green(), field, value.trim()),
                    Err(e) => println!("{} {}", "?".yellow(), e),
                }
            }
            "/theme" => match self.form.themes.click(rest) {
                Ok(()) => println!("{} theme: {}", "✓".green(), rest.cyan()),
                Err(e) => println!("{} {}", "?".yellow(), e),
            },
            "/themes" => {
                for button in self.form.themes.buttons() {
                    let mark = if button.selected { "●".green() } else { "○".dimmed() };
                    println!("  {} {}", mark, button.style);
                }
            }
            "/form" => match serde_json::to_string_pretty(&self.form.to_request()) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("{} {}", "?".yellow(), e),
            },
            "/submit" => match self.submit().await {
                Ok(()) => self.show(),
                Err(e) => self.alert(&e),
            },
            "/show" => {
                if !rest.is_empty() {
                    match <OutputFormat as clap::ValueEnum>::from_str(rest, true) {
                        Ok(format) => self.format = format,
                        Err(e) => {
                            println!("{} {}", "?".yellow(), e);
                            return Ok(SlashResult::Continue);
                        }
                    }
                }
                self.show();
            }
            "/save" => {
                if rest.is_empty() {
                    println!("{} Usage: /save <path.html>", "?".yellow());
                } else {
                    let path = PathBuf::from(rest);
                    match self.save(&path) {
                        Ok(()) => println!("{} Saved to {}", "✓".green(), path.display()),
                        Err(e) => {
                            warn!(path = %path.display(), error = %e, "save: failed");
                            println!("{} {:#}", "?".yellow(), e);
                        }
                    }
                }
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
            }
        }

        Ok(SlashResult::Continue)
    }

    /// Submit the form and render the result
    ///
    /// On error nothing is rendered and the current story stays as it was.
    pub async fn submit(&mut self) -> Result<(), PlanError> {
        let submission = self.collector.submit(&self.form).await?;
        self.renderer.render(&submission.plan, &mut self.document);
        Ok(())
    }

    fn show(&self) {
        match present(self.format, &self.document, self.renderer.context()) {
            Ok(text) => println!("{}", text),
            Err(e) => println!("{} {:#}", "?".yellow(), e),
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        let page = present(OutputFormat::Html, &self.document, self.renderer.context())?;
        std::fs::write(path, page).context(format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn document(&self) -> &StoryDocument {
        &self.document
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn renderer(&self) -> &PlanRenderer {
        &self.renderer
    }

    fn alert(&self, error: &PlanError) {
        warn!(kind = ?error.kind(), %error, "submit: failed");
        println!("{} {}", "!".red().bold(), error.to_string().red());
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "TripStory Interactive".bright_cyan().bold());
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn print_help(&self) {
        println!("{}", "Commands:".bold());
        println!("  {:<22} set a form field ({})", "/set <field> <value>", FIELD_NAMES.join(", "));
        println!("  {:<22} select a travel style", "/theme <style>");
        println!("  {:<22} list travel styles", "/themes");
        println!("  {:<22} show the request the form would send", "/form");
        println!("  {:<22} send the form and render the plan", "/submit");
        println!("  {:<22} show the rendered plan (text, html, json)", "/show [format]");
        println!("  {:<22} write the rendered plan as an HTML page", "/save <path>");
        println!("  {:<22} exit", "/quit");
    }
}
