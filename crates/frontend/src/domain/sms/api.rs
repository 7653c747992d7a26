use contracts::paging::Paged;
use contracts::sms::{
    BulkSmsRequest, RenewalReminderRequest, SendReport, SendSmsRequest, SmsBalance, SmsRecord,
};
use serde::Serialize;

use crate::shared::api_utils::{get_json, post_json};
use crate::shared::error::ApiError;

#[derive(Debug, Clone, Copy, Serialize)]
struct HistoryQuery {
    limit: usize,
    offset: usize,
}

pub async fn get_balance(token: &str) -> Result<SmsBalance, ApiError> {
    get_json("/api/sms/balance", Some(token)).await
}

pub async fn get_history(
    token: &str,
    limit: usize,
    offset: usize,
) -> Result<Paged<SmsRecord>, ApiError> {
    let query = serde_qs::to_string(&HistoryQuery { limit, offset })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    get_json(&format!("/api/sms/history?{}", query), Some(token)).await
}

/// Send one message; the created history record comes back.
pub async fn send_sms(token: &str, request: &SendSmsRequest) -> Result<SmsRecord, ApiError> {
    post_json("/api/sms/send", Some(token), request).await
}

pub async fn send_bulk(token: &str, request: &BulkSmsRequest) -> Result<SendReport, ApiError> {
    post_json("/api/sms/bulk-send", Some(token), request).await
}

/// Fan out reminders to members whose subscription expires within
/// `days_before_expiry` days.
pub async fn send_renewal_reminders(
    token: &str,
    days_before_expiry: u32,
) -> Result<SendReport, ApiError> {
    post_json(
        "/api/sms/renewal-reminders",
        Some(token),
        &RenewalReminderRequest { days_before_expiry },
    )
    .await
}
