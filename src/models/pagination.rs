//! 共享分页契约
//! 所有列表端点使用同一套基于 offset 的分页计算

use serde::Serialize;

/// 列表响应中的分页信息块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// 由页码、页大小和总行数计算分页信息
    /// 要求 page >= 1 且 limit >= 1（由请求解析层保证）
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };

        Self {
            page,
            limit,
            total,
            total_pages,
            // 超出最后一页的请求返回空列表，而不是错误；
            // 此时 has_next_page 为 false，分页信息仍然准确
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// offset = (page - 1) * limit
    pub fn offset(page: i64, limit: i64) -> i64 {
        (page - 1) * limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_formula() {
        assert_eq!(Pagination::offset(1, 10), 0);
        assert_eq!(Pagination::offset(2, 10), 10);
        assert_eq!(Pagination::offset(5, 20), 80);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 1).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(1, 3, 7).total_pages, 3);
    }

    #[test]
    fn test_page_beyond_last_page() {
        // 超出范围的页码：没有下一页，但上一页标志仍然成立
        let p = Pagination::new(5, 10, 10);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next_page);
        assert!(p.has_previous_page);
    }

    #[test]
    fn test_first_and_last_page_flags() {
        let first = Pagination::new(1, 10, 25);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let middle = Pagination::new(2, 10, 25);
        assert!(middle.has_next_page);
        assert!(middle.has_previous_page);

        let last = Pagination::new(3, 10, 25);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
    }
}
