//! Interactive search
//!
//! Each entered line is one change of the search box: the table is read
//! through the fetch cache, filtered and rendered again.

use crate::error::{Result, ViewError};
use crate::render::render_outcome;
use crate::sheets::{load_table, RecordSource};
use dialoguer::Input;
use puslespill_common::layout::{SEARCH_HELP, SEARCH_LABEL, SEARCH_PLACEHOLDER};
use puslespill_common::{search, LayoutMode};

const QUIT: &str = ":q";

/// What to do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Search(String),
    Quit,
}

pub fn parse_input(line: &str) -> BrowseAction {
    if line.trim() == QUIT {
        BrowseAction::Quit
    } else {
        BrowseAction::Search(line.to_string())
    }
}

/// Input change handler: fetch (cached), filter, render
pub async fn on_query_change<S: RecordSource>(
    source: &S,
    sort_on_load: bool,
    layout: LayoutMode,
    input: &str,
) -> Result<String> {
    let table = load_table(source, sort_on_load).await?;
    let outcome = search(&table, input);
    Ok(render_outcome(&outcome, layout))
}

pub async fn run_browse<S: RecordSource>(source: &S, sort_on_load: bool, layout: LayoutMode) -> Result<()> {
    println!("{} ({})", SEARCH_LABEL, SEARCH_HELP);
    println!("{} to quit\n", QUIT);

    // Empty search box on first render
    println!("{}", on_query_change(source, sort_on_load, layout, "").await?);

    loop {
        let line: String = Input::new()
            .with_prompt(SEARCH_PLACEHOLDER)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ViewError::Interactive(e.to_string()))?;

        match parse_input(&line) {
            BrowseAction::Quit => break,
            BrowseAction::Search(query) => {
                println!("{}", on_query_change(source, sort_on_load, layout, &query).await?);
            }
        }
    }

    Ok(())
}
