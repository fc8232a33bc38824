//! HTTP client for the options API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Options Tool API.
#[derive(Debug, Clone)]
pub struct OptionsClient {
    client: Client,
    base_url: Url,
}

impl OptionsClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(config.base_url));
        }
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    ///
    /// Free-text values such as symbols stay a single path segment even when
    /// they contain `/`, `?` or `#`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ========================================================================
    // Info & Health
    // ========================================================================

    /// Gets the API descriptor.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn api_info(&self) -> Result<ApiInfoResponse, Error> {
        let url = self.endpoint(&[""])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Performs a liveness check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = self.endpoint(&["api", "health"])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Performs a readiness check.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with status 503 when storage is unreachable.
    pub async fn readiness_check(&self) -> Result<ReadinessResponse, Error> {
        let url = self.endpoint(&["api", "health", "ready"])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Option Contracts
    // ========================================================================

    /// Lists all option contracts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_options(&self) -> Result<Vec<OptionContract>, Error> {
        self.search_options(&OptionQuery::default()).await
    }

    /// Lists option contracts matching the query filters.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn search_options(
        &self,
        query: &OptionQuery,
    ) -> Result<Vec<OptionContract>, Error> {
        let mut url = self.endpoint(&["api", "options"])?;
        let params = serde_urlencoded::to_string(query)?;
        if !params.is_empty() {
            url.set_query(Some(&params));
        }
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets an option contract by id.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no contract has that id.
    pub async fn get_option(&self, id: i64) -> Result<OptionContract, Error> {
        let url = self.endpoint(&["api", "options", id.to_string().as_str()])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists option contracts for a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_options_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Vec<OptionContract>, Error> {
        let url = self.endpoint(&["api", "options", "symbol", symbol])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists option contracts of a type.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_options_by_type(
        &self,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, Error> {
        let url = self.endpoint(&["api", "options", "type", option_type])?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Creates an option contract.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_option(&self, request: &OptionRequest) -> Result<OptionContract, Error> {
        let url = self.endpoint(&["api", "options"])?;
        let resp = self.client.post(url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Overwrites an option contract.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no contract has that id.
    pub async fn update_option(
        &self,
        id: i64,
        request: &OptionRequest,
    ) -> Result<OptionContract, Error> {
        let url = self.endpoint(&["api", "options", id.to_string().as_str()])?;
        let resp = self.client.put(url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Deletes an option contract.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no contract has that id.
    pub async fn delete_option(&self, id: i64) -> Result<(), Error> {
        let url = self.endpoint(&["api", "options", id.to_string().as_str()])?;
        let resp = self.client.delete(url).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Response Handling
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            Err(Error::NotFound(resp.url().path().to_string()))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    async fn handle_empty_response(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 404 {
            Err(Error::NotFound(resp.url().path().to_string()))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
