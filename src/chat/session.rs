use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::{panel, ui};
use crate::backend::BackendClient;
use crate::config::ResolvedConfig;
use crate::exchange::{ExchangeError, ExchangeSession, StepOutcome};
use crate::glossary::Highlighter;
use crate::ui::{Spinner, Style, answered};

/// An interactive chat session against one backend.
pub struct ChatSession {
    config: ResolvedConfig,
    client: BackendClient,
    exchange: ExchangeSession,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let client = BackendClient::new(config.endpoint.clone())?;
        Ok(Self {
            config,
            client,
            exchange: ExchangeSession::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.client.endpoint());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            let Some(line) = answered(input)? else {
                println!(); // Clear line before goodbye message
                break;
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd).await {
                        break;
                    }
                }
                Input::Text(text) => self.translate(&text).await?,
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Glossary => {
                let highlighter = self.highlighter();
                ui::print_glossary(self.exchange.glossary(), highlighter.as_ref());
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Highlight => {
                self.config.highlight = !self.config.highlight;
                println!(
                    "{} Highlighting {}\n",
                    Style::success("✓"),
                    Style::value(if self.config.highlight { "on" } else { "off" })
                );
            }
            SlashCommand::Polish(text) => self.polish(&text).await,
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    async fn polish(&self, text: &str) {
        if text.is_empty() {
            ui::print_error("Usage: /polish <text>");
            return;
        }

        let result = {
            let _spinner = Spinner::for_request("Polishing...");
            self.client.polish(text).await
        };

        match result {
            Ok(reply) => {
                println!("{reply}");
                println!();
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    async fn translate(&mut self, text: &str) -> Result<()> {
        let outcome = {
            let _spinner = Spinner::for_request("Looking up glossary...");
            self.exchange.start(&self.client, text).await
        };
        self.render_new();

        match outcome {
            Ok(StepOutcome::NeedsConfirmation) => self.confirm_glossary().await,
            Ok(StepOutcome::Completed) => Ok(()),
            Err(err) => {
                report(&err);
                Ok(())
            }
        }
    }

    async fn confirm_glossary(&mut self) -> Result<()> {
        let count = self.exchange.candidates().map_or(0, |c| c.len());
        ui::print_candidates_header(self.exchange.pending_message().unwrap_or_default(), count);

        if !panel::edit_candidates(&mut self.exchange)? {
            self.exchange.abandon();
            self.render_new();
            return Ok(());
        }

        loop {
            let outcome = {
                let _spinner = Spinner::for_request("Translating...");
                self.exchange.confirm(&self.client).await
            };
            self.render_new();

            let Err(err) = outcome else {
                return Ok(());
            };
            report(&err);

            // The glossary is still pending after a failed confirm
            if !self.exchange.is_awaiting_confirmation() || !ask_retry()? {
                self.exchange.abandon();
                self.render_new();
                return Ok(());
            }
        }
    }

    fn highlighter(&self) -> Option<Highlighter> {
        if !self.config.highlight {
            return None;
        }

        match Highlighter::new(self.exchange.glossary()) {
            Ok(h) => Some(h),
            Err(e) => {
                crate::warn!("{} highlighting disabled: {e:#}", Style::warning("Warning:"));
                None
            }
        }
    }

    fn render_new(&mut self) {
        let highlighter = self.highlighter();
        ui::render_entries(
            self.exchange.transcript_mut().take_unrendered(),
            highlighter.as_ref(),
        );
    }
}

// Recorded failures were already rendered from the transcript.
fn report(err: &ExchangeError) {
    if !err.is_recorded() {
        ui::print_error(&err.to_string());
    }
}

fn ask_retry() -> Result<bool> {
    let answer = Confirm::new("Send the glossary again?")
        .with_default(true)
        .prompt();
    Ok(answered(answer)?.unwrap_or(false))
}
