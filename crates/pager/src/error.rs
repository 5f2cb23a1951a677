//! Error types for the awde-pager crate.

use awde_ethiopic::EthiopicError;

/// Error type for all fallible operations in the awde-pager crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// Returned when a page index (or the index a date would map to) falls
    /// outside `[0, TOTAL_PAGES)`.
    ///
    /// The index is carried as a signed value so callers can see how far a
    /// date landed outside the navigable range. Out-of-range access is a
    /// caller error and is never silently clamped or wrapped.
    #[error("page out of range: {page} (must be 0..{total})")]
    PageOutOfRange {
        /// The offending page index.
        page: i64,
        /// The exclusive upper bound of valid pages.
        total: usize,
    },

    /// A date computation escaped the supported calendar range.
    #[error(transparent)]
    Calendar(#[from] EthiopicError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_out_of_range_message() {
        let err = PagerError::PageOutOfRange {
            page: -3,
            total: 121,
        };
        assert_eq!(err.to_string(), "page out of range: -3 (must be 0..121)");
    }

    #[test]
    fn calendar_errors_pass_through() {
        let inner = EthiopicError::InvalidMonth { month: 14 };
        let err = PagerError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<PagerError>();
    }
}
