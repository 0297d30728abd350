//! Page-number pagination used by the menu listing endpoints.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Row offset for a 1-based page number.
///
/// Any page at or below 1 (including 0 and negatives) maps to offset 0.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    if page <= 1 {
        0
    } else {
        (page - 1).saturating_mul(page_size)
    }
}

/// Clamp a user-provided page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(1, 10), 0);
    }

    #[test]
    fn zero_and_negative_pages_behave_like_first_page() {
        assert_eq!(page_offset(0, 10), 0);
        assert_eq!(page_offset(-4, 10), 0);
    }

    #[test]
    fn later_pages_skip_previous_rows() {
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(5, 3), 12);
    }

    #[test]
    fn page_size_defaults_and_clamps() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(-3)), 1);
        assert_eq!(clamp_page_size(Some(1000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(7)), 7);
    }
}
