//! HTTP request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};

use super::error::ApiError;
use super::templates;
use super::AppState;
use crate::api::{CompanyInfoBody, SearchRequest};

const APP_JS: &str = include_str!("../../static/app.js");
const STYLE_CSS: &str = include_str!("../../static/style.css");

/// `POST /api/search`
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<CompanyInfoBody>, ApiError> {
    let Json(request) = match payload {
        Ok(request) => request,
        // A body that was never read as JSON carries no company name.
        Err(JsonRejection::MissingJsonContentType(_)) => {
            return Err(ApiError::MissingCompanyName)
        }
        Err(e) => return Err(ApiError::InvalidBody(e.body_text())),
    };

    let company_name = request
        .company_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingCompanyName)?;

    // A panic inside the lookup becomes a 500.
    let lookup = state.lookup.clone();
    let info = tokio::spawn(async move { lookup.search(&company_name).await })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(info.into()))
}

/// Entry page for every path not claimed by another route.
pub async fn index() -> Result<Html<String>, ApiError> {
    templates::index_page()
        .map(Html)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}
