//! Terminal client for the lookup service.
//!
//! [`SearchClient`] talks to `POST /api/search`, [`SearchSession`] tracks the
//! view state of one interaction, and [`render`] draws it.

mod render;
mod state;

pub use render::render;
pub use state::{SearchSession, ViewState, EMPTY_INPUT_MESSAGE, FETCH_FAILED_MESSAGE};

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::api::{CompanyInfoBody, SearchRequest, SEARCH_PATH};
use crate::lookup::{CompanyInfo, LookupStatus};

/// Logo shown on the card built when the service cannot be reached.
pub const ERROR_PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/150x150?text=Error";

/// Errors that can occur while calling the lookup service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("connection error: {0}")]
    Transport(String),
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// HTTP client for the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    search_url: Url,
}

impl SearchClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:3001`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let search_url = Url::parse(base_url)?.join(SEARCH_PATH)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { client, search_url })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Look up a company. Any non-2xx status is an error.
    pub async fn search(&self, company_name: &str) -> Result<CompanyInfo, ClientError> {
        debug!("POST {} for {:?}", self.search_url, company_name);
        let resp = self
            .client
            .post(self.search_url.clone())
            .json(&SearchRequest::new(company_name))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }

        let body: CompanyInfoBody = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(body.into())
    }

    /// Look up a company, turning failures into an error-styled card.
    pub async fn fetch_company_info(&self, company_name: &str) -> CompanyInfo {
        match self.search(company_name).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Error fetching from API: {}", e);
                unavailable_card(company_name)
            }
        }
    }
}

/// Card shown in place of a result when the service could not be reached.
pub fn unavailable_card(company_name: &str) -> CompanyInfo {
    CompanyInfo {
        name: company_name.to_string(),
        logo: ERROR_PLACEHOLDER_LOGO.to_string(),
        description:
            "An error occurred while fetching company information. Please try again later."
                .to_string(),
        status: LookupStatus::Error,
    }
}
