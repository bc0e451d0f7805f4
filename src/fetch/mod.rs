//! Meal list fetcher.
//!
//! Issues one GET per call, decodes the body and publishes the result into
//! the screen's [`ScreenState`]. Failures are logged and leave the state as
//! it was.

mod error;

pub use error::FetchError;

use reqwest::Client;

use crate::config::HttpConfig;
use crate::meal::MealCollection;
use crate::state::ScreenState;

#[derive(Clone)]
pub struct MealFetcher {
    client: Client,
    endpoint: String,
    state: ScreenState,
}

impl MealFetcher {
    pub fn new(client: Client, endpoint: impl Into<String>, state: ScreenState) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            state,
        }
    }

    /// Build a client from HTTP settings.
    pub fn build_client(config: &HttpConfig) -> Result<Client, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(connect) = config.connect_timeout() {
            builder = builder.connect_timeout(connect);
        }
        if let Some(request) = config.request_timeout() {
            builder = builder.timeout(request);
        }
        builder.build().map_err(FetchError::Client)
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Fetch and decode the meal list without touching the state.
    pub async fn load(&self) -> Result<MealCollection, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(&self.endpoint, e))?;

        MealCollection::from_json(&body).map_err(|source| FetchError::Decode {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    /// Fetch, then replace the snapshot on success.
    ///
    /// Returns the number of published records. On failure the error is
    /// logged and the current snapshot is kept.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching meals");
        match self.load().await {
            Ok(collection) => {
                let count = collection.len();
                self.state.publish(collection);
                tracing::info!(endpoint = %self.endpoint, count, "Meals loaded");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    kind = err.kind(),
                    error = %err,
                    "Error getting meals"
                );
                Err(err)
            }
        }
    }
}
