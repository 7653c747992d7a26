use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provider account balance. The provider reports the balance as a decimal
/// string in ETB; it is displayed as-is, never computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsBalance {
    pub balance: String,
    pub estimated_messages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsStatus {
    Sent,
    Delivered,
    Failed,
}

impl SmsStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SmsStatus::Sent => "Sent",
            SmsStatus::Delivered => "Delivered",
            SmsStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsRecord {
    pub id: Uuid,
    pub phone_number: String,
    pub message: String,
    pub status: SmsStatus,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    pub phone_number: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSmsRequest {
    pub phone_numbers: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalReminderRequest {
    pub days_before_expiry: u32,
}

/// Outcome of a fan-out send (bulk SMS, renewal reminders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReport {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}
