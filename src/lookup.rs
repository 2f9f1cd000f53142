//! Company lookup service.
//!
//! Resolves a free-text company name against the [`CompanyDirectory`]. A miss
//! is not an error: it produces a `NotFound` card with a placeholder logo.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::directory::{CompanyDirectory, CompanyRecord};

/// Markup of the "Not Found" placeholder image.
const NOT_FOUND_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="150" viewBox="0 0 150 150"><rect width="150" height="150" fill="#f0f0f0"/><text x="75" y="75" font-family="Arial, sans-serif" font-size="14" text-anchor="middle" dominant-baseline="middle" fill="#666">Not Found</text></svg>"##;

/// Outcome of a lookup, used to pick the presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Found,
    NotFound,
    Error,
}

/// Company card returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    pub logo: String,
    pub description: String,
    pub status: LookupStatus,
}

impl CompanyInfo {
    /// Card for a directory hit.
    pub fn found(record: &CompanyRecord) -> Self {
        Self {
            name: record.name.clone(),
            logo: record.logo_url.clone(),
            description: record.description.clone(),
            status: LookupStatus::Found,
        }
    }

    /// Card for a name that is not in the directory.
    pub fn not_found(query: &str) -> Self {
        let name = title_case(query);
        let description = format!(
            "No information found for \"{}\". This company may not be in our database or may not exist.",
            name
        );
        Self {
            name,
            logo: not_found_placeholder(),
            description,
            status: LookupStatus::NotFound,
        }
    }

    /// Whether the card should get the muted "not found" treatment.
    pub fn is_muted(&self) -> bool {
        matches!(self.status, LookupStatus::NotFound | LookupStatus::Error)
    }
}

/// Capitalize each space-delimited word and lowercase the rest.
///
/// Splits on single spaces, so runs of spaces are kept as-is.
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| match word.chars().next() {
            // Lowercase the tail as a string so context rules like final sigma apply.
            Some(first) => {
                let mut formatted: String = first.to_uppercase().collect();
                formatted.push_str(&word[first.len_utf8()..].to_lowercase());
                formatted
            }
            None => String::new(),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Data URI for the "Not Found" logo.
pub fn not_found_placeholder() -> String {
    format!(
        "data:image/svg+xml;charset=UTF-8,{}",
        urlencoding::encode(NOT_FOUND_SVG)
    )
}

/// Resolves company names against a shared directory.
#[derive(Debug, Clone)]
pub struct LookupService {
    directory: Arc<CompanyDirectory>,
    simulated_latency: Duration,
}

impl LookupService {
    pub fn new(directory: Arc<CompanyDirectory>) -> Self {
        Self {
            directory,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Delay applied before answering a directory hit.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    /// Look up a company by name.
    ///
    /// The caller is expected to have rejected empty input already.
    pub async fn search(&self, company_name: &str) -> CompanyInfo {
        let query = company_name.trim();
        let normalized = query.to_lowercase();

        match self.directory.find(&normalized) {
            Some(record) => {
                if !self.simulated_latency.is_zero() {
                    tokio::time::sleep(self.simulated_latency).await;
                }
                info!("Found {:?} for query {:?}", record.name, query);
                CompanyInfo::found(record)
            }
            None => {
                debug!("No directory entry for {:?}", query);
                CompanyInfo::not_found(query)
            }
        }
    }
}
