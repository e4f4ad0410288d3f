//! Network actor - runs the country fetch and flag loads in Tokio async runtime

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch, load_flag};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    tasks: JoinSet<()>,
    /// Bounds the number of flag loads in flight
    flag_permits: Arc<Semaphore>,
}

impl NetworkActor {
    pub fn new(
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
        timeout: Option<Duration>,
        flag_concurrency: usize,
    ) -> Self {
        NetworkActor {
            client: create_client(timeout),
            response_tx,
            tasks: JoinSet::new(),
            flag_permits: Arc::new(Semaphore::new(flag_concurrency.max(1))),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCountries { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.tasks.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching countries");
                                let result = execute_fetch(&client, &url, id).await;
                                match &result {
                                    NetworkResponse::CountriesLoaded { records, time_ms, .. } => {
                                        tracing::info!(id, count = records.len(), time_ms, "Countries loaded");
                                    }
                                    NetworkResponse::CountriesFailed { error, time_ms, .. } => {
                                        tracing::warn!(id, %error, time_ms, "Countries request failed");
                                    }
                                    _ => {}
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::LoadFlag { index, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let permits = Arc::clone(&self.flag_permits);

                            self.tasks.spawn(async move {
                                // Closed only on shutdown
                                let Ok(_permit) = permits.acquire_owned().await else {
                                    return;
                                };
                                tracing::debug!(index, url = %url, "Loading flag");
                                let response = match load_flag(&client, &url).await {
                                    Ok(()) => NetworkResponse::FlagLoaded { index },
                                    Err(reason) => {
                                        tracing::warn!(index, url = %url, %reason, "Flag load failed");
                                        NetworkResponse::FlagFailed { index, reason }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.flag_permits.close();
                            self.tasks.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.tasks.join_next() => {}
            }
        }
    }
}
