use anyhow::Result;
use change_source_core::{
    registry_url_for_key, resolve_registry_target, Language, ManagerTarget, Message,
    PackageManager, RegistryCatalog, RegistryCatalogEntry,
};
use change_source_store::CustomRegistryStore;
use tracing::debug;

use crate::deletion::delete_checked_entries;
use crate::prompts::{Choice, MenuItem, Prompter};

/// Process-wide collaborators handed to every flow.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlowContext<'a> {
    pub(crate) catalog: &'a RegistryCatalog,
    pub(crate) store: &'a CustomRegistryStore,
    pub(crate) language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectionChoice {
    BuiltIn(String),
    Custom(String),
    ManualInput,
    DeleteCustom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectionState {
    ShowMenu,
    Resolved(String),
}

pub(crate) fn build_registry_menu(
    entries: &[RegistryCatalogEntry],
    custom: &[String],
    language: Language,
) -> Vec<MenuItem<SelectionChoice>> {
    let mut menu = entries
        .iter()
        .map(|entry| {
            MenuItem::Choice(Choice::new(
                format!("{} ({})", entry.label, entry.url),
                SelectionChoice::BuiltIn(entry.key.clone()),
            ))
        })
        .collect::<Vec<_>>();

    if !custom.is_empty() {
        menu.push(MenuItem::Separator(
            Message::CustomRegistries.text(language).to_string(),
        ));
        menu.extend(custom.iter().map(|url| {
            MenuItem::Choice(Choice::new(
                url.clone(),
                SelectionChoice::Custom(url.clone()),
            ))
        }));
        menu.push(MenuItem::Choice(Choice::new(
            Message::DeleteCustom.text(language),
            SelectionChoice::DeleteCustom,
        )));
    }

    menu.push(MenuItem::Choice(Choice::new(
        Message::ManualInput.text(language),
        SelectionChoice::ManualInput,
    )));
    menu
}

pub(crate) fn manager_label(target: ManagerTarget, language: Language) -> &'static str {
    match target {
        ManagerTarget::One(manager) => manager.as_str(),
        ManagerTarget::All => Message::AllManagers.text(language),
    }
}

/// Resolves the registry for a switch: a non-blank `--to` value is a key or
/// URL, otherwise the menu is shown.
pub(crate) fn resolve_switch_target<P: Prompter>(
    ctx: FlowContext<'_>,
    target: ManagerTarget,
    to: Option<&str>,
    prompter: &mut P,
) -> Result<String> {
    match to.filter(|value| !value.trim().is_empty()) {
        Some(value) => {
            let entries = ctx.catalog.entries(target.catalog_manager(), ctx.language);
            Ok(resolve_registry_target(&entries, value))
        }
        None => choose_registry(ctx, target, prompter),
    }
}

/// Shows the registry menu until a choice resolves to a URL. Deleting custom
/// entries shows the rebuilt menu again.
pub(crate) fn choose_registry<P: Prompter>(
    ctx: FlowContext<'_>,
    target: ManagerTarget,
    prompter: &mut P,
) -> Result<String> {
    let entries = ctx
        .catalog
        .entries(target.catalog_manager(), ctx.language);
    let message = format!(
        "{} ({})",
        Message::ChooseTarget.text(ctx.language),
        manager_label(target, ctx.language)
    );

    let mut state = SelectionState::ShowMenu;
    loop {
        state = match state {
            SelectionState::ShowMenu => {
                let custom = ctx.store.load();
                let menu = build_registry_menu(&entries, &custom, ctx.language);
                let choice = prompter.select(&message, &menu)?;
                resolve_choice(ctx, &entries, choice, prompter)?
            }
            SelectionState::Resolved(url) => return Ok(url),
        };
    }
}

fn resolve_choice<P: Prompter>(
    ctx: FlowContext<'_>,
    entries: &[RegistryCatalogEntry],
    choice: SelectionChoice,
    prompter: &mut P,
) -> Result<SelectionState> {
    match choice {
        SelectionChoice::BuiltIn(value) | SelectionChoice::Custom(value) => {
            let url = registry_url_for_key(entries, &value)
                .map(str::to_string)
                .unwrap_or(value);
            Ok(SelectionState::Resolved(url))
        }
        SelectionChoice::ManualInput => {
            let url = prompter
                .input(Message::EnterCustom.text(ctx.language))?
                .trim()
                .to_string();
            if ctx.store.add(&url)? {
                debug!(url = %url, "saved custom registry");
            }
            Ok(SelectionState::Resolved(url))
        }
        SelectionChoice::DeleteCustom => {
            let custom = ctx.store.load();
            if custom.is_empty() {
                prompter.notify("warn", Message::NothingToDelete.text(ctx.language))?;
            } else {
                delete_checked_entries(ctx.store, &custom, ctx.language, prompter)?;
            }
            Ok(SelectionState::ShowMenu)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManagerChoice {
    One(PackageManager),
    All,
}

/// Asks which managers to switch until at least one is checked.
pub(crate) fn choose_managers<P: Prompter>(
    language: Language,
    prompter: &mut P,
) -> Result<Vec<PackageManager>> {
    let mut choices = PackageManager::ALL
        .iter()
        .map(|manager| Choice::new(manager.as_str(), ManagerChoice::One(*manager)))
        .collect::<Vec<_>>();
    choices.push(Choice::new(
        Message::AllManagers.text(language),
        ManagerChoice::All,
    ));

    loop {
        let checked = prompter.multi_select(Message::SelectManager.text(language), &choices)?;
        if checked.is_empty() {
            prompter.notify("warn", Message::SelectAtLeastOne.text(language))?;
            continue;
        }
        if checked.contains(&ManagerChoice::All) {
            return Ok(PackageManager::ALL.to_vec());
        }
        return Ok(checked
            .into_iter()
            .filter_map(|choice| match choice {
                ManagerChoice::One(manager) => Some(manager),
                ManagerChoice::All => None,
            })
            .collect());
    }
}
