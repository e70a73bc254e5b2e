use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// `limit` query parameter shared by the paginated endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    pub limit: Option<i64>,
}

/// Resolved page/limit pair with the offset maths in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub limit: i64,
}

impl Page {
    /// Clamp inputs to sane values: page numbers start at 1 and the limit
    /// must be positive.
    #[must_use]
    pub fn new(number: Option<i64>, limit: Option<i64>) -> Self {
        let number = number.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        Self { number, limit }
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.limit
    }

    /// ceil(total / limit)
    #[must_use]
    pub fn total_pages(&self, total_docs: i64) -> i64 {
        (total_docs + self.limit - 1) / self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = Page::new(None, None);
        assert_eq!(page.number, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_advances_with_page_number() {
        let page = Page::new(Some(3), Some(25));
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn nonsense_input_is_clamped() {
        let page = Page::new(Some(0), Some(-5));
        assert_eq!(page.number, 1);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(Some(1), Some(10));
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(page.total_pages(95), 10);
    }
}
