use serde::Deserialize;

use super::ReportStatus;

/// Maximum number of reports returned by an administrative listing.
pub const MAX_LIST_SIZE: u64 = 200;

/// Filter of an administrative report listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListFilter {
    pub status: Option<ReportStatus>,
    pub admin_id: Option<i64>,
}
