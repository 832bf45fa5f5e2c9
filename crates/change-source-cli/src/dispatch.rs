use std::io::{self, BufReader};

use anyhow::Result;
use change_source_core::{
    detect_language, Language, ManagerTarget, Message, PackageManager, RegistryCatalog,
};
use change_source_store::{default_config_home, CustomRegistryStore};
use tracing::debug;

use crate::completion::write_completions_script;
use crate::deletion::run_delete_flow;
use crate::prompts::{Prompter, TerminalPrompter};
use crate::render::{format_registry_list_lines, TerminalRenderer};
use crate::selection::{choose_managers, resolve_switch_target, FlowContext};
use crate::switch::{
    format_current_registry_lines, format_switch_outcome_lines,
    read_current_registries_with_executor, run_shell_command, switch_registries_with_executor,
};
use crate::Cli;

pub(crate) fn env_language() -> Language {
    let var = |name: &str| std::env::var(name).ok();
    detect_language(
        var("NODE_LANG").as_deref(),
        var("LANG").as_deref(),
        var("LC_ALL").as_deref(),
    )
}

pub(crate) fn flag_managers(cli: &Cli) -> Vec<PackageManager> {
    PackageManager::ALL
        .into_iter()
        .filter(|manager| {
            cli.all
                || match manager {
                    PackageManager::Npm => cli.npm,
                    PackageManager::Yarn => cli.yarn,
                    PackageManager::Pnpm => cli.pnpm,
                }
        })
        .collect()
}

fn open_store(cli: &Cli) -> Result<CustomRegistryStore> {
    match &cli.config_file {
        Some(path) => Ok(CustomRegistryStore::new(path.clone())),
        None => Ok(CustomRegistryStore::from_config_home(&default_config_home()?)),
    }
}

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    let language = cli.lang.map(Language::from).unwrap_or_else(env_language);
    let renderer = TerminalRenderer::current();

    if let Some(shell) = cli.completions {
        let mut stdout = io::stdout();
        return write_completions_script(shell, language, &mut stdout);
    }

    if cli.show {
        let current = read_current_registries_with_executor(run_shell_command);
        renderer.print_lines(&format_current_registry_lines(&current, language));
        return Ok(());
    }

    let catalog = RegistryCatalog::builtin();
    let store = open_store(&cli)?;
    let mut prompter = TerminalPrompter::new(
        BufReader::new(io::stdin()),
        io::stdout(),
        renderer.style(),
    );

    if cli.list {
        let lines =
            format_registry_list_lines(&catalog, &store.load(), language, renderer.style());
        renderer.print_lines(&lines);
        return Ok(());
    }

    if cli.delete {
        let outcome = run_delete_flow(&store, language, &mut prompter)?;
        debug!(?outcome, "delete flow finished");
        return Ok(());
    }

    let ctx = FlowContext {
        catalog: &catalog,
        store: &store,
        language,
    };
    run_switch(&cli, ctx, renderer, &mut prompter)
}

fn run_switch<P: Prompter>(
    cli: &Cli,
    ctx: FlowContext<'_>,
    renderer: TerminalRenderer,
    prompter: &mut P,
) -> Result<()> {
    let mut managers = flag_managers(cli);
    if managers.is_empty() {
        managers = choose_managers(ctx.language, prompter)?;
    }

    let target = ManagerTarget::from_managers(&managers);
    let registry = resolve_switch_target(ctx, target, cli.to.as_deref(), prompter)?;

    renderer.print_status("step", Message::Switching.text(ctx.language));
    let progress = renderer.start_progress("switch", managers.len() as u64);
    let outcomes = switch_registries_with_executor(&managers, &registry, |command| {
        let result = run_shell_command(command);
        progress.advance();
        result
    })?;
    progress.finish();

    for (ok, line) in format_switch_outcome_lines(&outcomes, ctx.language, renderer.style()) {
        if ok {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
    println!();
    renderer.print_status("ok", Message::Done.text(ctx.language));
    Ok(())
}
