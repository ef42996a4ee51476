use gloo_net::http::Request;

use crate::config::ANALYZE_ENDPOINT;
use crate::model::AnalysisResult;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("could not decode analysis: {0}")]
    Decode(String),
}

pub fn analyze_url(key: &str) -> String {
    format!("{}?key={}", ANALYZE_ENDPOINT, urlencoding::encode(key))
}

pub fn elapsed_text(elapsed_ms: f64) -> String {
    format!("Time taken: {:.2} seconds", elapsed_ms / 1000.0)
}

/// Fetches the precomputed analysis for `key`.
///
/// A non-2xx status is an error; a `null` body is `Ok(None)`.
pub async fn fetch_analysis(key: &str) -> Result<Option<AnalysisResult>, FetchError> {
    let resp = Request::get(&analyze_url(key))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    AnalysisResult::from_json(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
