//! Network messages - communication between App and Network layers

use crate::error::LoadError;
use crate::models::CountryRecord;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the country list (issued once per run)
    FetchCountries {
        id: u64,
        url: String,
    },
    /// Load the flag image of the record at `index`
    LoadFlag {
        index: usize,
        url: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Country list arrived and parsed
    CountriesLoaded {
        id: u64,
        records: Vec<CountryRecord>,
        time_ms: u64,
    },
    /// Country list request failed for any reason
    CountriesFailed {
        id: u64,
        error: LoadError,
        time_ms: u64,
    },
    FlagLoaded {
        index: usize,
    },
    FlagFailed {
        index: usize,
        reason: String,
    },
}

impl NetworkResponse {
    /// Id of the country-list request this answers, if any
    pub fn request_id(&self) -> Option<u64> {
        match self {
            NetworkResponse::CountriesLoaded { id, .. } => Some(*id),
            NetworkResponse::CountriesFailed { id, .. } => Some(*id),
            NetworkResponse::FlagLoaded { .. } | NetworkResponse::FlagFailed { .. } => None,
        }
    }

    /// Turn a country-list response back into the load outcome
    pub fn into_load_result(self) -> Option<Result<Vec<CountryRecord>, LoadError>> {
        match self {
            NetworkResponse::CountriesLoaded { records, .. } => Some(Ok(records)),
            NetworkResponse::CountriesFailed { error, .. } => Some(Err(error)),
            _ => None,
        }
    }
}
