use std::process::Command;

use anyhow::Result;
use change_source_core::{build_switch_command, Language, Message, PackageManager};
use tracing::debug;

use crate::render::{render_status_line, OutputStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwitchOutcome {
    pub(crate) manager: PackageManager,
    pub(crate) result: std::result::Result<(), String>,
}

/// Runs the switch command for every manager. A failing manager is recorded
/// and the batch continues.
pub(crate) fn switch_registries_with_executor<F>(
    managers: &[PackageManager],
    url: &str,
    mut executor: F,
) -> Result<Vec<SwitchOutcome>>
where
    F: FnMut(&str) -> std::result::Result<String, String>,
{
    let mut outcomes = Vec::with_capacity(managers.len());
    for manager in managers {
        let command = build_switch_command(manager.as_str(), url)?;
        let result = executor(&command).map(|_| ());
        outcomes.push(SwitchOutcome {
            manager: *manager,
            result,
        });
    }
    Ok(outcomes)
}

pub(crate) fn read_current_registries_with_executor<F>(
    mut executor: F,
) -> Vec<(PackageManager, Option<String>)>
where
    F: FnMut(&str) -> std::result::Result<String, String>,
{
    PackageManager::ALL
        .iter()
        .map(|manager| {
            let current = executor(&manager.get_registry_command()).ok();
            (*manager, current)
        })
        .collect()
}

/// Runs `command` through the platform shell. On failure the detail is the
/// trimmed stderr, or the exit status when stderr is empty.
pub(crate) fn run_shell_command(command: &str) -> std::result::Result<String, String> {
    let mut shell = if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.arg("/C");
        shell
    } else {
        let mut shell = Command::new("sh");
        shell.arg("-c");
        shell
    };

    debug!(command, "running shell command");
    let output = shell
        .arg(command)
        .output()
        .map_err(|err| format!("failed to start command '{command}': {err}"))?;
    if output.status.success() {
        debug!(command, "shell command succeeded");
        return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!(command, status = %output.status, "shell command failed");
    if stderr.trim().is_empty() {
        Err(format!("command '{command}' failed: {}", output.status))
    } else {
        Err(stderr.trim().to_string())
    }
}

pub(crate) fn format_switch_outcome_lines(
    outcomes: &[SwitchOutcome],
    language: Language,
    style: OutputStyle,
) -> Vec<(bool, String)> {
    outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(()) => (
                true,
                render_status_line(
                    style,
                    "ok",
                    &format!("[{}] {}", outcome.manager, Message::Success.text(language)),
                ),
            ),
            Err(detail) => (
                false,
                render_status_line(
                    style,
                    "err",
                    &format!(
                        "[{}] {} {detail}",
                        outcome.manager,
                        Message::ErrorOccurred.text(language)
                    ),
                ),
            ),
        })
        .collect()
}

pub(crate) fn format_current_registry_lines(
    current: &[(PackageManager, Option<String>)],
    language: Language,
) -> Vec<String> {
    let mut lines = vec![Message::CurrentRegistries.text(language).to_string()];
    for (manager, registry) in current {
        let value = registry
            .as_deref()
            .unwrap_or_else(|| Message::NotAvailable.text(language));
        lines.push(format!("{manager}: {value}"));
    }
    lines
}
