//! Connection settings for the enrollment API.

use std::fmt;

use enroll_model::Resource;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("enroll-admin/", env!("CARGO_PKG_VERSION"));

/// Where the API lives and how to identify ourselves to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the API. Collections live at `{base_url}{resource}/`.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parsed base URL, always ending in `/` so relative joins append.
    pub fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| self.invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(self.invalid("expected an http or https URL".to_string()));
        }
        Ok(url)
    }

    /// `{base}{resource}/`
    pub fn collection_url(&self, resource: Resource) -> Result<Url> {
        self.join(&format!("{}/", resource.segment()))
    }

    /// `{base}{resource}/{id}/`
    pub fn item_url(&self, resource: Resource, id: impl fmt::Display) -> Result<Url> {
        self.join(&format!("{}/{}/", resource.segment(), id))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base()?
            .join(path)
            .map_err(|e| self.invalid(e.to_string()))
    }

    fn invalid(&self, reason: String) -> ClientError {
        ClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        }
    }
}
