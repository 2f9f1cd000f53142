//! Web server for company lookups.
//!
//! Serves the search page and its assets, plus the JSON search endpoint:
//! - `POST /api/search` resolves a company name against the directory
//! - every other path falls back to the search page

mod error;
mod handlers;
mod routes;
mod templates;

pub use error::ApiError;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::directory::CompanyDirectory;
use crate::lookup::LookupService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let directory = CompanyDirectory::load_or_builtin(settings.companies_file.as_deref())?;
        let lookup = LookupService::new(Arc::new(directory))
            .with_simulated_latency(settings.simulated_latency());

        Ok(Self::with_lookup(lookup))
    }

    pub fn with_lookup(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    tracing::info!(
        "Loaded {} known companies",
        state.lookup.directory().len()
    );
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
