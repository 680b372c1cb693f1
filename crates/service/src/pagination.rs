//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Build from optional query values; `None` when neither is given.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        Some(Self {
            page: page.unwrap_or(1),
            per_page: per_page.unwrap_or(Self::DEFAULT_PER_PAGE),
        })
    }

    /// Clamp to sane defaults and convert to `u64` as `(page_index, per_page)`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, Self::MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: Self::DEFAULT_PER_PAGE } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }

    #[test]
    fn from_query_only_when_requested() {
        assert_eq!(Pagination::from_query(None, None), None);
        assert_eq!(Pagination::from_query(Some(3), None), Some(Pagination { page: 3, per_page: 20 }));
        assert_eq!(Pagination::from_query(None, Some(5)), Some(Pagination { page: 1, per_page: 5 }));
    }
}
