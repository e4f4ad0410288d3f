//! Derived view - what the screen should show for a given app state
//!
//! Pure function of the load state, the query and the flag statuses.
//! Nothing here is stored; it is rebuilt on every change.

use std::collections::HashMap;

use crate::filter::matching_indices;
use crate::models::{FlagStatus, LoadState};

/// One card in the grid
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Position of the record in the full list
    pub index: usize,
    pub key: String,
    pub name: String,
    pub image_src: String,
    pub alt: String,
    pub flag_status: FlagStatus,
}

/// Everything the UI needs to draw the body of the screen
#[derive(Clone, Debug, PartialEq, Default)]
pub enum View {
    #[default]
    Loading,
    Error(String),
    Loaded {
        /// Search box content, `None` when search is disabled
        search: Option<String>,
        cards: Vec<Card>,
    },
}

impl View {
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Loaded { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Loaded, but nothing matches the query
    pub fn is_no_results(&self) -> bool {
        matches!(self, View::Loaded { cards, .. } if cards.is_empty())
    }
}

/// Options that shape the view but never change at runtime
#[derive(Clone, Debug)]
pub struct ViewOptions {
    pub search_enabled: bool,
    pub placeholder_flag_url: String,
}

pub fn build_view(
    load: &LoadState,
    query: &str,
    flags: &HashMap<usize, FlagStatus>,
    options: &ViewOptions,
) -> View {
    let records = match load {
        LoadState::Loading => return View::Loading,
        LoadState::Error(message) => return View::Error(message.clone()),
        LoadState::Loaded(records) => records,
    };

    // Without a search box there is nothing to filter by
    let effective_query = if options.search_enabled { query } else { "" };

    let cards = matching_indices(records, effective_query)
        .into_iter()
        .map(|index| {
            let record = &records[index];
            let flag_status = flags.get(&index).copied().unwrap_or_default();
            Card {
                index,
                key: record.code.clone(),
                name: record.name.clone(),
                image_src: flag_status
                    .image_src(&record.flag, &options.placeholder_flag_url)
                    .to_string(),
                alt: record.alt_text(),
                flag_status,
            }
        })
        .collect();

    View::Loaded {
        search: options.search_enabled.then(|| query.to_string()),
        cards,
    }
}
