//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&pageSize=`).
///
/// Values are kept as raw strings so that malformed input never rejects the
/// request: anything that is not an integer reads as `0`, which disables
/// pagination in the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    pub fn page_size(&self) -> i64 {
        parse_or_zero(self.page_size.as_deref())
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}
