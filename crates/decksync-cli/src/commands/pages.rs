use decksync_core::{ConfigStore, RowChange, UpdateMode};

use crate::cli::PagesCommands;
use crate::commands::common::{
    format_page_line, format_page_lines, open_session, page_to_list_item, row_index,
    save_session, PageListItem,
};
use crate::error::CliError;

pub fn run_pages(command: PagesCommands, store: &ConfigStore) -> Result<(), CliError> {
    match command {
        PagesCommands::List { json } => run_pages_list(json, store),
        PagesCommands::Add { page_id, deck } => run_pages_add(&page_id, &deck, store),
        PagesCommands::Remove { row } => run_pages_remove(row, store),
        PagesCommands::Set {
            row,
            mode,
            recursive,
        } => run_pages_set(row, mode.map(|mode| mode.update_mode()), recursive, store),
        PagesCommands::SelectAll { mode } => {
            let mut session = open_session(store)?;
            session.table.select_all(mode.into());
            save_session(&session, store)?;
            Ok(())
        }
        PagesCommands::Sort => {
            let mut session = open_session(store)?;
            session.table.sort_by_deck();
            save_session(&session, store)?;
            for line in format_page_lines(session.table.rows()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

pub fn run_pages_list(as_json: bool, store: &ConfigStore) -> Result<(), CliError> {
    let session = open_session(store)?;
    let rows = session.table.rows();

    if as_json {
        let items = rows
            .iter()
            .enumerate()
            .map(|(index, row)| page_to_list_item(index, row))
            .collect::<Vec<PageListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if rows.is_empty() {
        println!("No pages configured.");
    } else {
        for line in format_page_lines(rows) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn run_pages_add(page_id: &str, deck: &str, store: &ConfigStore) -> Result<(), CliError> {
    let mut session = open_session(store)?;
    session.table.add_row(page_id, deck)?;
    let index = session.table.len() - 1;
    save_session(&session, store)?;
    println!("{}", format_page_line(index, &session.table.rows()[index]));
    Ok(())
}

pub fn run_pages_remove(row: Option<usize>, store: &ConfigStore) -> Result<(), CliError> {
    let mut session = open_session(store)?;
    let selected = row.map(row_index).transpose()?;
    let removed = session.table.delete_row(selected)?;
    save_session(&session, store)?;
    println!("Removed {} -> {}", removed.page_id, removed.target_deck);
    Ok(())
}

pub fn run_pages_set(
    row: usize,
    mode: Option<Option<UpdateMode>>,
    recursive: Option<bool>,
    store: &ConfigStore,
) -> Result<(), CliError> {
    if mode.is_none() && recursive.is_none() {
        return Err(CliError::EmptyRowChange);
    }

    let index = row_index(row)?;
    let mut session = open_session(store)?;
    if let Some(mode) = mode {
        session.table.set_row_mode(index, mode)?;
    }
    if let Some(recursive) = recursive {
        session
            .table
            .update_row(index, RowChange::SetRecursive(recursive))?;
    }
    save_session(&session, store)?;
    println!("{}", format_page_line(index, &session.table.rows()[index]));
    Ok(())
}
