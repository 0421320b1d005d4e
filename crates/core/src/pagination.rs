//! Page/page-size to offset/limit conversion.
//!
//! Listing endpoints accept `?page=&pageSize=`. Pagination only applies when
//! both are strictly positive; any other combination returns the full set.

/// A concrete `LIMIT`/`OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// Resolve `page`/`page_size` into a window, or `None` when pagination is off.
///
/// Pages are 1-based. The offset saturates at `i64::MAX` rather than
/// overflowing on absurd inputs.
pub fn page_window(page: i64, page_size: i64) -> Option<PageWindow> {
    if page <= 0 || page_size <= 0 {
        return None;
    }
    Some(PageWindow {
        limit: page_size,
        offset: (page - 1).saturating_mul(page_size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(
            page_window(1, 2),
            Some(PageWindow {
                limit: 2,
                offset: 0
            })
        );
    }

    #[test]
    fn later_pages_skip_previous_rows() {
        assert_eq!(
            page_window(3, 10),
            Some(PageWindow {
                limit: 10,
                offset: 20
            })
        );
    }

    #[test]
    fn zero_or_negative_disables_pagination() {
        assert_eq!(page_window(0, 2), None);
        assert_eq!(page_window(1, 0), None);
        assert_eq!(page_window(-1, 5), None);
        assert_eq!(page_window(2, -5), None);
    }

    #[test]
    fn huge_pages_saturate() {
        let window = page_window(i64::MAX, i64::MAX).unwrap();
        assert_eq!(window.offset, i64::MAX);
    }
}
