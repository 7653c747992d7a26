use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AdminProfile,
}

/// Profile of the signed-in back-office admin. Replaced wholesale on
/// update, never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Partial profile update. The API requires `current_password` whenever
/// `email` or `password` is present; the form validates that before
/// submitting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_omits_empty_fields() {
        let request = UpdateProfileRequest {
            email: Some("admin@gym.com".to_string()),
            password: None,
            current_password: Some("secret".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "admin@gym.com");
        assert_eq!(json["currentPassword"], "secret");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn login_response_uses_camel_case() {
        let json = serde_json::json!({
            "accessToken": "tok-123",
            "user": {
                "id": "8e9a5f9e-7c5a-4f5f-9d05-54a62c2a4c2e",
                "name": "Admin",
                "email": "admin@gym.com",
                "role": "administrator"
            }
        });
        let response: LoginResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.access_token, "tok-123");
        assert_eq!(response.user.name, "Admin");
    }
}
