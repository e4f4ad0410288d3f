//! HTTP client wrapper - fetches the country list and flag images

use std::time::{Duration, Instant};

use crate::error::LoadError;
use crate::messages::NetworkResponse;
use crate::models::{parse_countries, CountryRecord};

/// Fetch and parse the country list
pub async fn fetch_countries(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<CountryRecord>, LoadError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::from_reqwest(&e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Http(status.as_u16()));
    }

    let body = resp.text().await.map_err(|e| LoadError::from_reqwest(&e))?;
    parse_countries(&body)
}

/// Run the country-list request and package the outcome for the App layer
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_countries(client, url).await;
    let time_ms = duration_ms(start.elapsed());

    match result {
        Ok(records) => NetworkResponse::CountriesLoaded {
            id: request_id,
            records,
            time_ms,
        },
        Err(error) => NetworkResponse::CountriesFailed {
            id: request_id,
            error,
            time_ms,
        },
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
pub fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Load a flag image; any failure is reported as a short reason
pub async fn load_flag(client: &reqwest::Client, url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err(String::from("no flag URL"));
    }

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    // Drain the body so the load counts as complete
    resp.bytes()
        .await
        .map_err(|e| format!("Error reading body: {}", e))?;
    Ok(())
}

/// Create an HTTP client; no timeout unless one is configured
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
