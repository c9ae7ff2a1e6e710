use anyhow::Result;
use clap::Parser;

use glossa_cli::cli::commands::{chat, configure, glossary, polish, translate};
use glossa_cli::cli::{Args, Command, exit_code};
use glossa_cli::config::ResolveOptions;
use glossa_cli::output::{self, OutputConfig};
use glossa_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let options = ResolveOptions {
        endpoint: args.endpoint,
        no_highlight: args.no_highlight,
    };

    match args.command {
        None | Some(Command::Chat) => chat::run_chat(&options).await?,
        Some(Command::Translate { file, yes }) => {
            let translate_options = translate::TranslateOptions { file, yes };
            translate::run_translate(&translate_options, &options).await?;
        }
        Some(Command::Polish { file }) => polish::run_polish(file.as_deref(), &options).await?,
        Some(Command::Glossary { command }) => glossary::run_glossary(command, &options).await?,
        Some(Command::Configure { show }) => configure::run_configure(show)?,
    }

    Ok(())
}
