//! HTTP access to the Folio backend.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, Portfolio, Theme};

/// Fetch the shaped portfolio from `GET /api/portfolio`.
pub async fn fetch_portfolio(backend_url: &str) -> AppResult<Portfolio> {
    let url = format!("{}/api/portfolio", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message,
        });
    }

    response
        .json::<Portfolio>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// URL of the backend stylesheet for a theme.
pub fn stylesheet_url(backend_url: &str, theme: Theme) -> String {
    format!("{}/theme.css?theme={}", backend_url, theme.as_str())
}
