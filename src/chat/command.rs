use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/glossary", "Show the active glossary"),
    ("/help", "Show available commands"),
    ("/highlight", "Toggle glossary highlighting"),
    ("/polish", "Fix grammar and spelling of the given text"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Glossary,
    Help,
    Highlight,
    /// Text to polish; empty when none was given.
    Polish(String),
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .unwrap_or((cmd, ""));

    match name {
        "config" => Input::Command(SlashCommand::Config),
        "glossary" => Input::Command(SlashCommand::Glossary),
        "help" => Input::Command(SlashCommand::Help),
        "highlight" => Input::Command(SlashCommand::Highlight),
        "polish" => Input::Command(SlashCommand::Polish(rest.trim().to_string())),
        "quit" | "exit" | "q" => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(
            cmd.split_whitespace().collect::<Vec<_>>().join(" "),
        )),
    }
}
