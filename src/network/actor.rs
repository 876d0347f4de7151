//! Network actor - runs user service calls in the Tokio async runtime

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::{ClientError, Result};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::UserApi;

/// Network actor that executes user service commands
pub struct NetworkActor {
    api: Arc<dyn UserApi>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: Arc<dyn UserApi>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id }) => {
                            let api = Arc::clone(&self.api);
                            let response_tx = self.response_tx.clone();

                            // No in-flight guard: overlapping fetches race, last one wins
                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching users");
                                let result = isolated(async move { api.fetch_all().await }, ClientError::Fetch).await;
                                match &result {
                                    Ok(users) => tracing::info!(id, count = users.len(), "Users fetched"),
                                    Err(e) => tracing::warn!(id, error = %e, "Fetching users failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::UsersFetched { id, result });
                            });
                        }

                        Some(NetworkCommand::CreateUser { id, name }) => {
                            let api = Arc::clone(&self.api);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, name = %name, "Creating user");
                                let result = isolated(async move { api.create(&name).await }, ClientError::Create).await;
                                match &result {
                                    Ok(user) => tracing::info!(id, user_id = %user.id, "User created"),
                                    Err(e) => tracing::warn!(id, error = %e, "Creating user failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::UserCreated { id, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // Late responses are discarded
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(joined) = self.active_requests.join_next() => {
                    if let Err(e) = joined {
                        if !e.is_cancelled() {
                            tracing::warn!(error = %e, "Request task failed");
                        }
                    }
                }
            }
        }
    }
}

/// Run a call on its own task so a panic still yields a response.
async fn isolated<T, F>(call: F, wrap: fn(String) -> ClientError) -> Result<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    match tokio::spawn(call).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Request panicked");
            Err(wrap(format!("Request failed: {}", e)))
        }
    }
}
