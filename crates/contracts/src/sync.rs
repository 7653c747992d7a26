use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp of the last completed member-data sync. `None` when no sync
/// has ever run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSync {
    pub last_sync_at: Option<DateTime<Utc>>,
}
