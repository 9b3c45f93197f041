//! `reqwest`-backed implementation of the resource operations.
//!
//! Every call is exactly one HTTP request against a fixed collection or item
//! URL. Nothing is retried or cached.

use enroll_model::{Entity, Resource, Updatable};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

/// HTTP client for the four enrollment collections.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Builds a client, validating the base URL up front.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.base()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ClientError::InvalidConfig(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Settings the client was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {resource}/`, the whole collection.
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>> {
        let url = self.config.collection_url(E::RESOURCE)?;
        tracing::debug!(method = "GET", %url, "listing {}", E::RESOURCE);

        let response = self.client.get(url).send().await?;
        let response = check_status(E::RESOURCE, response).await?;
        Ok(response.json().await?)
    }

    /// `POST {resource}/` with the create payload; returns the stored entity.
    pub async fn create<E: Entity>(&self, new: &E::New) -> Result<E> {
        let url = self.config.collection_url(E::RESOURCE)?;
        tracing::debug!(method = "POST", %url, "creating {}", E::RESOURCE.singular());

        let response = self.client.post(url).json(new).send().await?;
        let response = check_status(E::RESOURCE, response).await?;
        Ok(response.json().await?)
    }

    /// `PUT {resource}/{id}/` with a (possibly partial) patch.
    pub async fn update<E: Updatable>(&self, id: E::Id, patch: &E::Patch) -> Result<E> {
        let url = self.config.item_url(E::RESOURCE, id)?;
        tracing::debug!(method = "PUT", %url, "updating {} {id}", E::RESOURCE.singular());

        let response = self.client.put(url).json(patch).send().await?;
        let response = check_status(E::RESOURCE, response).await?;
        Ok(response.json().await?)
    }

    /// `DELETE {resource}/{id}/`. The response body is ignored.
    pub async fn delete<E: Entity>(&self, id: E::Id) -> Result<()> {
        let url = self.config.item_url(E::RESOURCE, id)?;
        tracing::debug!(method = "DELETE", %url, "deleting {} {id}", E::RESOURCE.singular());

        let response = self.client.delete(url).send().await?;
        check_status(E::RESOURCE, response).await?;
        Ok(())
    }
}

/// Turns any non-2xx answer into [`ClientError::Status`].
async fn check_status(resource: Resource, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%resource, status = status.as_u16(), "API request failed");
    Err(ClientError::Status {
        resource,
        status: status.as_u16(),
        body,
    })
}
