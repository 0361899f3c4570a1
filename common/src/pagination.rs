//! 표 페이지 나누기

/// 선택 가능한 페이지당 행 수
pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[10, 20, 50, 100];
pub const DEFAULT_ROWS_PER_PAGE: usize = 20;
/// 페이지 번호 버튼 최대 개수
pub const MAX_VISIBLE_PAGES: usize = 5;

/// 현재 페이지 정보 (page는 1부터)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub total_pages: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
}

impl Page {
    /// 요청 페이지를 1..=total_pages 로 보정
    pub fn new(total_rows: usize, rows_per_page: usize, requested: usize) -> Self {
        let rows_per_page = if rows_per_page == 0 { DEFAULT_ROWS_PER_PAGE } else { rows_per_page };
        let total_pages = total_rows.div_ceil(rows_per_page).max(1);
        Self {
            number: requested.clamp(1, total_pages),
            total_pages,
            rows_per_page,
            total_rows,
        }
    }

    /// 이 페이지의 시작 인덱스 (0부터, 포함)
    pub fn start(&self) -> usize {
        ((self.number - 1) * self.rows_per_page).min(self.total_rows)
    }

    /// 끝 인덱스 (제외)
    pub fn end(&self) -> usize {
        (self.number * self.rows_per_page).min(self.total_rows)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end().min(items.len());
        let start = self.start().min(end);
        &items[start..end]
    }

    /// 현재 페이지를 중심으로 최대 5개의 페이지 번호
    pub fn visible_pages(&self) -> Vec<usize> {
        let window = MAX_VISIBLE_PAGES - 1;
        let mut first = self.number.saturating_sub(2).max(1);
        let last = (first + window).min(self.total_pages);
        if last - first < window {
            first = last.saturating_sub(window).max(1);
        }
        (first..=last).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// "Showing 21-40 of 57 records"
    pub fn showing_label(&self) -> String {
        let from = if self.total_rows == 0 { 0 } else { self.start() + 1 };
        format!("Showing {}-{} of {} records", from, self.end(), self.total_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds() {
        let page = Page::new(57, 20, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.start(), 20);
        assert_eq!(page.end(), 40);
        assert_eq!(page.showing_label(), "Showing 21-40 of 57 records");
    }

    #[test]
    fn test_last_page_partial() {
        let page = Page::new(57, 20, 3);
        assert_eq!(page.end(), 57);
        let items: Vec<usize> = (0..57).collect();
        assert_eq!(page.slice(&items).len(), 17);
        assert!(!page.has_next());
    }

    #[test]
    fn test_requested_page_clamped() {
        assert_eq!(Page::new(57, 20, 99).number, 3);
        assert_eq!(Page::new(57, 20, 0).number, 1);
    }

    #[test]
    fn test_empty_rows() {
        let page = Page::new(0, 20, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.showing_label(), "Showing 0-0 of 0 records");
        assert!(page.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_visible_pages_window() {
        assert_eq!(Page::new(200, 10, 1).visible_pages(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Page::new(200, 10, 10).visible_pages(), vec![8, 9, 10, 11, 12]);
        assert_eq!(Page::new(200, 10, 20).visible_pages(), vec![16, 17, 18, 19, 20]);
        assert_eq!(Page::new(30, 10, 2).visible_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_rows_per_page_uses_default() {
        assert_eq!(Page::new(45, 0, 1).rows_per_page, DEFAULT_ROWS_PER_PAGE);
    }
}
