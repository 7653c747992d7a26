use contracts::customers::{CustomerStatus, PotentialCustomer};
use contracts::paging::Paged;
use serde::Serialize;

use crate::shared::api_utils::get_json;
use crate::shared::error::ApiError;

#[derive(Debug, Clone, Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CustomerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    limit: usize,
    offset: usize,
}

/// Page through the registered leads, optionally narrowed by status and a
/// free-text search.
pub async fn list_potential_customers(
    token: &str,
    status: Option<CustomerStatus>,
    search: Option<&str>,
    limit: usize,
    offset: usize,
) -> Result<Paged<PotentialCustomer>, ApiError> {
    let query = serde_qs::to_string(&ListQuery {
        status,
        search,
        limit,
        offset,
    })
    .map_err(|e| ApiError::Decode(e.to_string()))?;
    get_json(&format!("/api/potential-customers?{}", query), Some(token)).await
}

/// Server-side count for one status bucket; fetches a single-row page and
/// reads `total`.
pub async fn count_by_status(
    token: &str,
    status: Option<CustomerStatus>,
) -> Result<u64, ApiError> {
    let page = list_potential_customers(token, status, None, 1, 0).await?;
    Ok(page.total)
}
