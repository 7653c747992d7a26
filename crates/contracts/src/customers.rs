use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lead status as tracked by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Pending,
    Converted,
    Ignored,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Pending,
        CustomerStatus::Converted,
        CustomerStatus::Ignored,
    ];

    /// Wire value, also used as the filter query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Pending => "pending",
            CustomerStatus::Converted => "converted",
            CustomerStatus::Ignored => "ignored",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Pending => "Pending",
            CustomerStatus::Converted => "Converted",
            CustomerStatus::Ignored => "Ignored",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Lead captured from the public site's registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialCustomer {
    pub id: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub service_id: Option<i64>,
    pub status: CustomerStatus,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_value() {
        for status in CustomerStatus::ALL {
            assert_eq!(CustomerStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CustomerStatus::parse("unknown"), None);
    }

    #[test]
    fn customer_deserializes_from_api_payload() {
        let json = serde_json::json!({
            "id": "3f2c3a44-0a53-4a6d-9e5c-2f8de2f0a111",
            "fullName": "Abel Tesfaye",
            "phoneNumber": "+251911000000",
            "email": null,
            "serviceId": 3,
            "status": "pending",
            "registeredAt": "2025-06-01T09:30:00Z"
        });
        let customer: PotentialCustomer = serde_json::from_value(json).unwrap();
        assert_eq!(customer.status, CustomerStatus::Pending);
        assert_eq!(customer.service_id, Some(3));
        assert!(customer.email.is_none());
    }
}
