use std::io::IsTerminal;
use std::time::Duration;

use anstyle::{AnsiColor, Effects, Style};
use change_source_core::{Language, Message, PackageManager, RegistryCatalog};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

pub(crate) fn resolve_output_style(stdout_is_terminal: bool, no_color: bool) -> OutputStyle {
    if stdout_is_terminal && !no_color {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

pub(crate) fn current_output_style() -> OutputStyle {
    resolve_output_style(
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    )
}

pub(crate) fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match style {
        OutputStyle::Plain => message.to_string(),
        OutputStyle::Rich => format!("{} {message}", status_badge(status)),
    }
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "ok" => "[OK]",
        "warn" => "[WARN]",
        "err" => "[ERR]",
        _ => "[..]",
    }
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct TerminalRenderer {
    style: OutputStyle,
}

pub(crate) struct TerminalProgress {
    progress_bar: Option<ProgressBar>,
}

impl TerminalRenderer {
    pub(crate) fn from_style(style: OutputStyle) -> Self {
        Self { style }
    }

    pub(crate) fn current() -> Self {
        Self::from_style(current_output_style())
    }

    pub(crate) fn style(self) -> OutputStyle {
        self.style
    }

    pub(crate) fn print_status(self, status: &str, message: &str) {
        println!("{}", render_status_line(self.style, status, message));
    }

    pub(crate) fn print_lines(self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    /// A spinner bar for runs touching more than one manager; plain output and
    /// single-manager runs get none.
    pub(crate) fn start_progress(self, label: &str, total: u64) -> TerminalProgress {
        let progress_bar = if self.style == OutputStyle::Rich && total > 1 {
            let progress_bar = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::with_template(
                "{spinner:.cyan.bold} {msg:<8} [{bar:20.cyan/blue}] {pos}/{len}",
            ) {
                progress_bar.set_style(style.progress_chars("=>-"));
            }
            progress_bar.set_message(label.to_string());
            progress_bar.enable_steady_tick(Duration::from_millis(80));
            Some(progress_bar)
        } else {
            None
        };

        TerminalProgress { progress_bar }
    }
}

impl TerminalProgress {
    pub(crate) fn advance(&self) {
        if let Some(progress_bar) = &self.progress_bar {
            progress_bar.inc(1);
        }
    }

    pub(crate) fn finish(mut self) {
        if let Some(progress_bar) = self.progress_bar.take() {
            progress_bar.finish_and_clear();
        }
    }
}

pub(crate) fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

pub(crate) fn url_style() -> Style {
    Style::new().fg_color(Some(AnsiColor::Green.into()))
}

pub(crate) fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

fn styled(output: OutputStyle, style: Style, text: &str) -> String {
    match output {
        OutputStyle::Plain => text.to_string(),
        OutputStyle::Rich => colorize(style, text),
    }
}

pub(crate) fn format_registry_list_lines(
    catalog: &RegistryCatalog,
    custom: &[String],
    language: Language,
    style: OutputStyle,
) -> Vec<String> {
    let mut lines = Vec::new();
    for manager in PackageManager::ALL {
        let header = format!(
            "{} [{}]:",
            Message::ListRegistries.text(language),
            manager.as_str()
        );
        lines.push(styled(style, section_style(), &header));
        for entry in catalog.entries(manager, language) {
            lines.push(format!(
                "  {:<10}:  {}",
                entry.label,
                styled(style, url_style(), &entry.url)
            ));
        }
    }

    let header = format!("{}:", Message::CustomRegistries.text(language));
    lines.push(styled(style, section_style(), &header));
    if custom.is_empty() {
        lines.push(format!("  {}", Message::NoCustomRegistries.text(language)));
    } else {
        for url in custom {
            lines.push(format!("  {}", styled(style, url_style(), url)));
        }
    }

    lines
}
