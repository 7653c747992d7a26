use contracts::auth::{AdminProfile, LoginRequest, LoginResponse, UpdateProfileRequest};

use crate::shared::api_utils::{get_json, post_json, put_json};
use crate::shared::error::ApiError;

/// Exchange credentials for a bearer token and the admin profile. The only
/// unauthenticated call in the API.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    post_json("/api/auth/login", None, &LoginRequest { email, password }).await
}

/// Fetch the profile for the given token; also serves as token validation.
pub async fn get_profile(token: &str) -> Result<AdminProfile, ApiError> {
    get_json("/api/auth/profile", Some(token)).await
}

/// Update email and/or password. Returns the full replacement profile.
pub async fn update_profile(
    token: &str,
    request: &UpdateProfileRequest,
) -> Result<AdminProfile, ApiError> {
    put_json("/api/auth/profile", Some(token), request).await
}
