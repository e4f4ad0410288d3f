//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default endpoint serving the country list
pub const DEFAULT_COUNTRIES_URL: &str = "https://xcountries-backend.azurewebsites.net/all";

/// Image source shown when a flag fails to load
pub const PLACEHOLDER_FLAG_URL: &str = "https://via.placeholder.com/100x75?text=Flag+Missing";

/// Default number of flag loads allowed in flight at once
pub const DEFAULT_FLAG_CONCURRENCY: usize = 8;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "flagdex.log";

/// Minimum width of a card in the grid, in terminal cells
pub const CARD_WIDTH: u16 = 24;

/// Height of a card in the grid, in terminal rows
pub const CARD_HEIGHT: u16 = 5;

pub const LOADING_TEXT: &str = "Loading countries...";
pub const NO_RESULTS_TEXT: &str = "No countries found matching your search";
pub const SEARCH_PLACEHOLDER: &str = "Search for a country...";

/// Application name
pub const APP_NAME: &str = "Flagdex";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
