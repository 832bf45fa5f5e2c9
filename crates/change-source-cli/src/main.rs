mod completion;
mod deletion;
mod dispatch;
mod prompts;
mod render;
mod selection;
mod switch;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use change_source_core::{Language, Message};
use clap::{Command, CommandFactory, FromArgMatches, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::completion::CliCompletionShell;
use crate::dispatch::{env_language, run_cli};

// Flag help is filled in per language by `localized_command`.
#[derive(Parser, Debug)]
#[command(name = "change-source", version, long_about = None)]
struct Cli {
    #[arg(long)]
    all: bool,
    #[arg(long)]
    npm: bool,
    #[arg(long)]
    yarn: bool,
    #[arg(long)]
    pnpm: bool,
    #[arg(long, value_name = "REGISTRY")]
    to: Option<String>,
    #[arg(long)]
    list: bool,
    #[arg(long)]
    show: bool,
    #[arg(long)]
    delete: bool,
    #[arg(long, value_enum)]
    lang: Option<CliLanguage>,
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<CliCompletionShell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliLanguage {
    En,
    Zh,
}

impl From<CliLanguage> for Language {
    fn from(value: CliLanguage) -> Self {
        match value {
            CliLanguage::En => Language::En,
            CliLanguage::Zh => Language::Zh,
        }
    }
}

pub(crate) fn localized_command(language: Language) -> Command {
    let text = |message: Message| message.text(language);
    [
        ("all", Message::HelpAll),
        ("npm", Message::HelpNpm),
        ("yarn", Message::HelpYarn),
        ("pnpm", Message::HelpPnpm),
        ("to", Message::HelpTo),
        ("list", Message::HelpList),
        ("show", Message::HelpShow),
        ("delete", Message::HelpDelete),
        ("lang", Message::HelpLang),
        ("config_file", Message::HelpConfigFile),
        ("completions", Message::HelpCompletions),
    ]
    .into_iter()
    .fold(Cli::command(), |command, (id, message)| {
        command.mut_arg(id, |arg| arg.help(text(message)))
    })
    .about(text(Message::AppDescription))
    .after_help(text(Message::HelpExamples))
}

fn parse_cli(language: Language) -> Cli {
    let matches = localized_command(language).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = parse_cli(env_language());
    run_cli(cli)
}
