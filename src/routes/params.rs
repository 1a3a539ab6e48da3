use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_RECORDS_PER_PAGE: u64 = 10;
// Offsets are bound as signed 64-bit integers by the store driver.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Raw listing query. Values are kept as text so that garbage falls back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Items per page, default 10.
    pub records_per_page: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// Explicit offset; wins over the page-derived one when it parses.
    pub start_index: Option<String>,
}

/// Resolved `[start, start + limit)` window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn normalize(&self) -> PageWindow {
        let limit = parse(&self.records_per_page)
            .filter(|n| *n >= 1)
            .map(|n| n as u64)
            .unwrap_or(DEFAULT_RECORDS_PER_PAGE);
        let page = parse(&self.page).filter(|n| *n >= 1).unwrap_or(1) as u64;

        let start = match parse(&self.start_index) {
            Some(index) => index.max(0) as u64,
            None => (page - 1).saturating_mul(limit),
        }
        .min(MAX_OFFSET);

        PageWindow { start, limit }
    }
}

impl PageWindow {
    /// Number of items the window holds out of `total`.
    pub fn len_of(&self, total: u64) -> u64 {
        total.saturating_sub(self.start).min(self.limit)
    }
}

fn parse(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(rpp: Option<&str>, page: Option<&str>, start: Option<&str>) -> Pagination {
        Pagination {
            records_per_page: rpp.map(String::from),
            page: page.map(String::from),
            start_index: start.map(String::from),
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        let window = query(None, None, None).normalize();
        assert_eq!(window, PageWindow { start: 0, limit: 10 });
    }

    #[test]
    fn page_derives_the_offset() {
        let window = query(Some("5"), Some("3"), None).normalize();
        assert_eq!(window, PageWindow { start: 10, limit: 5 });
    }

    #[test]
    fn explicit_start_index_overrides_page() {
        let window = query(Some("5"), Some("3"), Some("2")).normalize();
        assert_eq!(window, PageWindow { start: 2, limit: 5 });
    }

    #[test]
    fn invalid_values_fall_back() {
        let window = query(Some("0"), Some("-4"), Some("abc")).normalize();
        assert_eq!(window, PageWindow { start: 0, limit: 10 });

        let window = query(Some("x"), Some("2"), Some("-3")).normalize();
        assert_eq!(window, PageWindow { start: 0, limit: 10 });
    }

    #[test]
    fn huge_page_offset_is_clamped() {
        let window = query(Some("10"), Some("1000000000000000000"), None).normalize();
        assert_eq!(window.start, i64::MAX as u64);
        assert_eq!(window.len_of(3), 0);
    }

    #[test]
    fn window_length_never_goes_negative() {
        let window = PageWindow { start: 8, limit: 5 };
        assert_eq!(window.len_of(20), 5);
        assert_eq!(window.len_of(10), 2);
        assert_eq!(window.len_of(8), 0);
        assert_eq!(window.len_of(3), 0);
    }
}
