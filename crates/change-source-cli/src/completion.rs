use std::io::Write;

use anyhow::{Context, Result};
use change_source_core::Language;
use clap::ValueEnum;
use clap_complete::Shell;

use crate::localized_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CliCompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl From<CliCompletionShell> for Shell {
    fn from(value: CliCompletionShell) -> Self {
        match value {
            CliCompletionShell::Bash => Shell::Bash,
            CliCompletionShell::Zsh => Shell::Zsh,
            CliCompletionShell::Fish => Shell::Fish,
            CliCompletionShell::Powershell => Shell::PowerShell,
        }
    }
}

pub(crate) fn write_completions_script<W: Write>(
    shell: CliCompletionShell,
    language: Language,
    writer: &mut W,
) -> Result<()> {
    let mut command = localized_command(language);
    let generator: Shell = shell.into();
    let mut generated = Vec::new();
    clap_complete::generate(generator, &mut command, "change-source", &mut generated);

    writer
        .write_all(&generated)
        .with_context(|| "failed writing generated completion script")
}
