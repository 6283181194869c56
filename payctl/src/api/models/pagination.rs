//! Page-number pagination for list endpoints.
//!
//! The admin dashboard uses page/per_page semantics: `page` starts at 1 and
//! out-of-range values are rejected with a validation error rather than
//! silently clamped, so a client bug surfaces as a 422 instead of a wrong
//! page of data.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

use crate::errors::Error;

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Maximum number of items that can be requested per page.
pub const MAX_PER_PAGE: i64 = 100;

/// Standard page-number pagination query parameters.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number (default: 1)
    #[param(default = 1, minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<i64>,

    /// Items per page (default: 10, max: 100)
    #[param(default = 10, minimum = 1, maximum = 100)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub per_page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Rows to skip for the current page.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }

    /// Reject out-of-range values before any query runs.
    pub fn validate(&self) -> Result<(), Error> {
        if self.page() < 1 {
            return Err(Error::validation("page must be at least 1"));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page()) {
            return Err(Error::validation(format!("per_page must be between 1 and {MAX_PER_PAGE}")));
        }
        Ok(())
    }
}

/// Pagination metadata attached to paged responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: i64,
    /// Last page number; at least 1 even for an empty result set
    pub last_page: i64,
    pub per_page: i64,
    /// Total rows matching the filter, before pagination
    pub total: i64,
}

impl PaginationMeta {
    pub fn new(current_page: i64, per_page: i64, total: i64) -> Self {
        let last_page = (total + per_page - 1) / per_page;
        Self {
            current_page,
            last_page: last_page.max(1),
            per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let q = PageQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(q.offset(), 0);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let q = PageQuery {
            page: Some(0),
            per_page: None,
        };
        assert!(q.validate().is_err());

        let q = PageQuery {
            page: None,
            per_page: Some(0),
        };
        assert!(q.validate().is_err());

        let q = PageQuery {
            page: None,
            per_page: Some(101),
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn offset_arithmetic() {
        let q = PageQuery {
            page: Some(2),
            per_page: Some(10),
        };
        assert_eq!(q.offset(), 10);
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(PaginationMeta::new(2, 10, 25).last_page, 3);
        assert_eq!(PaginationMeta::new(1, 10, 30).last_page, 3);
        assert_eq!(PaginationMeta::new(1, 10, 31).last_page, 4);
    }

    #[test]
    fn empty_result_still_has_page_one() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.last_page, 1);
        assert_eq!(meta.total, 0);
    }
}
