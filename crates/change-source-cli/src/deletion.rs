use anyhow::Result;
use change_source_core::{Language, Message};
use change_source_store::CustomRegistryStore;

use crate::prompts::{Choice, MenuItem, Prompter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DeleteOutcome {
    NothingToDelete,
    DeletedAll(usize),
    DeletedSelected(Vec<String>),
    NoneSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteAction {
    All,
    Selected,
}

/// Standalone `--delete` flow. Ends after one action.
pub(crate) fn run_delete_flow<P: Prompter>(
    store: &CustomRegistryStore,
    language: Language,
    prompter: &mut P,
) -> Result<DeleteOutcome> {
    let custom = store.load();
    if custom.is_empty() {
        prompter.notify("warn", Message::NothingToDelete.text(language))?;
        return Ok(DeleteOutcome::NothingToDelete);
    }

    let actions = [
        MenuItem::Choice(Choice::new(
            Message::DeleteAll.text(language),
            DeleteAction::All,
        )),
        MenuItem::Choice(Choice::new(
            Message::DeleteSelected.text(language),
            DeleteAction::Selected,
        )),
    ];
    match prompter.select(Message::DeleteAction.text(language), &actions)? {
        DeleteAction::All => {
            let removed = store.remove(&custom)?;
            report_deleted(prompter, language, &custom)?;
            Ok(DeleteOutcome::DeletedAll(removed))
        }
        DeleteAction::Selected => delete_checked_entries(store, &custom, language, prompter),
    }
}

/// Multi-selects over `custom` and removes whatever was checked.
pub(crate) fn delete_checked_entries<P: Prompter>(
    store: &CustomRegistryStore,
    custom: &[String],
    language: Language,
    prompter: &mut P,
) -> Result<DeleteOutcome> {
    let choices = custom
        .iter()
        .map(|url| Choice::new(url.clone(), url.clone()))
        .collect::<Vec<_>>();
    let checked = prompter.multi_select(Message::SelectToDelete.text(language), &choices)?;
    if checked.is_empty() {
        prompter.notify("warn", Message::NoneSelected.text(language))?;
        return Ok(DeleteOutcome::NoneSelected);
    }

    store.remove(&checked)?;
    report_deleted(prompter, language, &checked)?;
    Ok(DeleteOutcome::DeletedSelected(checked))
}

fn report_deleted<P: Prompter>(prompter: &mut P, language: Language, urls: &[String]) -> Result<()> {
    prompter.notify(
        "ok",
        &format!("{} {}", Message::Deleted.text(language), urls.join(", ")),
    )
}
