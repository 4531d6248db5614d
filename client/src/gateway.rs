//! The remote gateway: the four REST operations against the hike endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use waymark_engine::{Hike, Result, SyncError};

/// The four REST operations of the record service.
///
/// A trait so the store can be driven by a stub in tests; production code
/// uses [`HttpGateway`].
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch every record.
    async fn list(&self) -> Result<Vec<Hike>>;

    /// Create a record; the response carries the server-assigned id.
    async fn create(&self, hike: &Hike) -> Result<Hike>;

    /// Update the record addressed by `hike.id`; the response is the
    /// server's canonical form.
    async fn update(&self, hike: &Hike) -> Result<Hike>;

    /// Delete the record with this id. No payload on success.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// JSON-over-HTTP gateway.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway addressing `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/hike", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/api/hike/{}", self.base_url, id)
    }
}

fn transport(err: reqwest::Error) -> SyncError {
    SyncError::Transport(err.to_string())
}

/// Map a response status, treating 404 as a missing record.
fn check_status(response: reqwest::Response, id: &str) -> Result<reqwest::Response> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(SyncError::NotFound(id.to_string()));
    }
    response.error_for_status().map_err(transport)
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list(&self) -> Result<Vec<Hike>> {
        let url = self.collection_url();
        tracing::debug!(%url, "list records");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        response.json().await.map_err(transport)
    }

    async fn create(&self, hike: &Hike) -> Result<Hike> {
        let url = self.collection_url();
        tracing::debug!(%url, "create record");

        let response = self
            .http
            .post(&url)
            .json(hike)
            .send()
            .await
            .map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        response.json().await.map_err(transport)
    }

    async fn update(&self, hike: &Hike) -> Result<Hike> {
        let url = self.record_url(&hike.id);
        tracing::debug!(%url, "update record");

        let response = self
            .http
            .put(&url)
            .json(hike)
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response, &hike.id)?;
        response.json().await.map_err(transport)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id);
        tracing::debug!(%url, "delete record");

        let response = self.http.delete(&url).send().await.map_err(transport)?;
        check_status(response, id)?;
        Ok(())
    }
}
