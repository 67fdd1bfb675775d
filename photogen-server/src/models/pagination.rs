//! Offset pagination for list endpoints

use serde::Deserialize;

/// Default number of rows skipped
pub const DEFAULT_SKIP: i64 = 0;

/// Default number of rows returned
pub const DEFAULT_LIMIT: i64 = 100;

/// Slice of a newest-first listing.
///
/// Values are handed to the database unchanged: there is no upper bound on
/// `limit` and negative values are left for Postgres to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip (SQL OFFSET)
    pub skip: i64,
    /// Rows to return (SQL LIMIT)
    pub limit: i64,
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.skip.unwrap_or(DEFAULT_SKIP),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Pagination::from(PaginationParams::default());
        assert_eq!(p, Pagination::new(0, 100));
    }

    #[test]
    fn partial_params() {
        let p = Pagination::from(PaginationParams {
            skip: Some(20),
            limit: None,
        });
        assert_eq!(p.skip, 20);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn no_clamping() {
        let p = Pagination::from(PaginationParams {
            skip: Some(-1),
            limit: Some(1_000_000),
        });
        assert_eq!(p.skip, -1);
        assert_eq!(p.limit, 1_000_000);
    }
}
