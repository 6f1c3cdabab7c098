//! Pagination value type
//!
//! This module provides the pagination specification consumers pass into
//! query-building code. It is a plain value with documented defaults and
//! performs no validation; rejecting out-of-range values is the query
//! layer's concern.

/// Pagination, ordering and grouping specification for list queries.
///
/// Defaults: `page = 1`, `page_size = 30`, `order_by = "Id"`,
/// `group_by = "Id"`, `ascending = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Records per page
    pub page_size: u32,
    /// Field the result set is ordered by
    pub order_by: String,
    /// Field the result set is grouped by
    pub group_by: String,
    /// Ascending order when true, descending otherwise
    pub ascending: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            order_by: "Id".to_string(),
            group_by: "Id".to_string(),
            ascending: true,
        }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = group_by.into();
        self
    }

    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    /// Row offset of the first record on this page
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.saturating_sub(1))) * i64::from(self.page_size)
    }

    /// Maximum number of records on this page
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let pagination = Pagination::default();

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 30);
        assert_eq!(pagination.order_by, "Id");
        assert_eq!(pagination.group_by, "Id");
        assert!(pagination.ascending);
    }

    #[test]
    fn offset_and_limit_follow_page_math() {
        let pagination = Pagination::new().with_page(3).with_page_size(20);

        assert_eq!(pagination.offset(), 40);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn first_page_starts_at_offset_zero() {
        assert_eq!(Pagination::default().offset(), 0);
        // page 0 is not rejected here; the query layer decides
        assert_eq!(Pagination::new().with_page(0).offset(), 0);
    }

    #[test]
    fn builder_methods_override_fields() {
        let pagination = Pagination::new()
            .with_order_by("CreatedAt")
            .with_group_by("OrganizationId")
            .descending();

        assert_eq!(pagination.order_by, "CreatedAt");
        assert_eq!(pagination.group_by, "OrganizationId");
        assert!(!pagination.ascending);
    }
}
