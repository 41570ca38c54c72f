use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            (total_items + page_size - 1) / page_size
        };
        Pagination {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 12, 13).total_pages, 2);
        assert_eq!(Pagination::new(1, 12, 12).total_pages, 1);
        assert_eq!(Pagination::new(1, 12, 0).total_pages, 1);
    }

    #[test]
    fn test_navigation_flags() {
        let page = Pagination::new(2, 12, 30);
        assert!(page.has_previous());
        assert!(page.has_next());
        let last = Pagination::new(3, 12, 30);
        assert!(!last.has_next());
    }
}
