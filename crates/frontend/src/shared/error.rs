use thiserror::Error;

/// Failure modes of a call to the gym REST API.
///
/// `BadRequest` carries the collaborator's own message when the body had
/// one; transport and server failures stay opaque and are substituted with
/// a caller-provided fallback at display time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error("server error (status {status})")]
    Server { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for inline display in a form. Validation errors and
    /// rejected credentials keep their text; everything else collapses to
    /// the given fallback.
    pub fn form_message(&self, fallback: &str) -> String {
        match self {
            ApiError::BadRequest(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Unauthorized => "Invalid credentials.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_keeps_server_message() {
        let error = ApiError::BadRequest("Email already in use".to_string());
        assert_eq!(error.form_message("fallback"), "Email already in use");
    }

    #[test]
    fn empty_bad_request_falls_back() {
        let error = ApiError::BadRequest(String::new());
        assert_eq!(
            error.form_message("Login failed. Please try again."),
            "Login failed. Please try again."
        );
    }

    #[test]
    fn opaque_failures_use_fallback() {
        let network = ApiError::Network("timed out".to_string());
        let server = ApiError::Server { status: 503 };
        assert_eq!(network.form_message("fallback"), "fallback");
        assert_eq!(server.form_message("fallback"), "fallback");
    }

    #[test]
    fn unauthorized_names_credentials() {
        assert_eq!(
            ApiError::Unauthorized.form_message("fallback"),
            "Invalid credentials."
        );
    }
}
