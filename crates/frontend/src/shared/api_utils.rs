//! API utilities for talking to the gym REST service.
//!
//! Provides URL construction plus typed request helpers. Every helper maps
//! transport, HTTP and body failures onto [`ApiError`](crate::shared::error::ApiError).

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/api/potential-customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error payload the backend attaches to 4xx responses.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_default();
    if status == 400 || status == 422 {
        ApiError::BadRequest(message)
    } else {
        ApiError::Server { status }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and parse the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = with_bearer(gloo_net::http::Request::get(&api_url(path)), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON body to `path` and parse the JSON response.
pub async fn post_json<B, T>(path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = with_bearer(gloo_net::http::Request::post(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// PUT a JSON body to `path` and parse the JSON response.
pub async fn put_json<B, T>(path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = with_bearer(gloo_net::http::Request::put(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}
