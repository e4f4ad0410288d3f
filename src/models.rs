use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// A single country as served by the countries endpoint
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CountryRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Flag image URL
    #[serde(default, alias = "flagUrl", deserialize_with = "lenient_string")]
    pub flag: String,
    /// Only used as a list key
    #[serde(default, rename = "alpha2Code", alias = "code", deserialize_with = "lenient_string")]
    pub code: String,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, flag: impl Into<String>, code: impl Into<String>) -> Self {
        CountryRecord {
            name: name.into(),
            flag: flag.into(),
            code: code.into(),
        }
    }

    /// Alt text for the flag image
    pub fn alt_text(&self) -> String {
        format!("Flag of {}", self.name)
    }
}

/// Records are not validated: nulls become empty and other scalars become text
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Parse a response body into country records.
///
/// Only the outer array is checked; an element that is not an object
/// becomes an empty record instead of failing the whole list.
pub fn parse_countries(body: &str) -> Result<Vec<CountryRecord>, LoadError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(elements
        .into_iter()
        .map(|element| serde_json::from_value(element).unwrap_or_default())
        .collect())
}

/// Lifecycle of the country list: Loading -> (Error | Loaded), never back
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<CountryRecord>),
}

impl LoadState {
    /// Apply the outcome of the initial request.
    ///
    /// Returns false (and leaves the state untouched) if already settled.
    pub fn settle(&mut self, result: Result<Vec<CountryRecord>, LoadError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(records) => LoadState::Loaded(records),
            Err(e) => LoadState::Error(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn records(&self) -> Option<&[CountryRecord]> {
        match self {
            LoadState::Loaded(records) => Some(records),
            _ => None,
        }
    }
}

/// Per-card flag image state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlagStatus {
    #[default]
    Pending,
    Loaded,
    /// Load failed; the placeholder is shown instead
    Fallback,
}

impl FlagStatus {
    /// The image source a card should display
    pub fn image_src<'a>(&self, flag: &'a str, placeholder: &'a str) -> &'a str {
        match self {
            FlagStatus::Fallback => placeholder,
            FlagStatus::Pending | FlagStatus::Loaded => flag,
        }
    }
}
