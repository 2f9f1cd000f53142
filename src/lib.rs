//! Company lookup: resolve a company name to a logo and short description.
//!
//! The server answers `POST /api/search` from a static directory of known
//! companies, falling back to a "not found" card. A bundled browser page and
//! a terminal client consume the endpoint.

pub mod api;
pub mod client;
pub mod config;
pub mod directory;
pub mod lookup;
pub mod server;

pub use directory::{CompanyDirectory, CompanyRecord, DirectoryError};
pub use lookup::{CompanyInfo, LookupService, LookupStatus};
