//! PDF 레이아웃 설정
//!
//! 단위는 mm. 원점은 PDF와 같이 페이지 왼쪽 아래.

/// 1mm = 2.83465pt
pub const MM_TO_PT: f32 = 2.834_646;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 표 열 너비 (No, 상품, 날짜, 노출, 클릭, CTR)
pub const TABLE_COLUMN_WIDTHS_MM: [f32; 6] = [12.0, 50.0, 38.0, 30.0, 25.0, 25.0];

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / MM_TO_PT
}

/// 대략적인 문자열 폭 (오른쪽 정렬용)
///
/// 전각 문자는 글자 크기만큼, 그 외는 절반 폭으로 본다.
pub fn estimate_text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let em: f32 = text.chars().map(|c| if c.is_ascii() { 0.5 } else { 1.0 }).sum();
    pt_to_mm(em * font_size_pt)
}

/// A4 보고서 레이아웃
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// 제목・광고주・기간
    pub title_height_mm: f32,
    pub card_height_mm: f32,
    pub chart_height_mm: f32,
    /// 블록 사이 간격
    pub block_gap_mm: f32,
    pub table_header_height_mm: f32,
    pub table_row_height_mm: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl PdfLayout {
    pub fn a4() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_mm: 15.0,
            title_height_mm: 22.0,
            card_height_mm: 22.0,
            chart_height_mm: 45.0,
            block_gap_mm: 6.0,
            table_header_height_mm: 8.0,
            table_row_height_mm: 7.0,
        }
    }

    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    /// 첫 페이지에서 표 위에 놓이는 블록 높이 (제목, 카드, 차트 2개)
    pub fn first_page_preamble_mm(&self) -> f32 {
        self.title_height_mm + self.card_height_mm + self.chart_height_mm * 2.0 + self.block_gap_mm * 4.0
    }

    /// 첫 페이지 표 행 수
    pub fn rows_on_first_page(&self) -> usize {
        let available = self.page_height_mm - self.margin_mm * 2.0 - self.first_page_preamble_mm();
        self.rows_fitting(available)
    }

    /// 2페이지 이후 표 행 수
    pub fn rows_on_following_pages(&self) -> usize {
        self.rows_fitting(self.page_height_mm - self.margin_mm * 2.0)
    }

    fn rows_fitting(&self, available_mm: f32) -> usize {
        let body = available_mm - self.table_header_height_mm;
        if body <= 0.0 || self.table_row_height_mm <= 0.0 {
            return 1;
        }
        ((body / self.table_row_height_mm).floor() as usize).max(1)
    }

    /// 페이지별 표 행 범위 (행이 없어도 첫 페이지는 만든다)
    pub fn table_pages(&self, total_rows: usize) -> Vec<std::ops::Range<usize>> {
        let first = self.rows_on_first_page().min(total_rows);
        let mut pages = vec![0..first];
        let per_page = self.rows_on_following_pages();
        let mut start = first;
        while start < total_rows {
            let end = (start + per_page).min(total_rows);
            pages.push(start..end);
            start = end;
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(10.0) - 28.346).abs() < 0.01);
        assert!((pt_to_mm(mm_to_pt(42.0)) - 42.0).abs() < 0.001);
    }

    #[test]
    fn test_columns_fill_content_width() {
        let layout = PdfLayout::a4();
        let total: f32 = TABLE_COLUMN_WIDTHS_MM.iter().sum();
        assert!((total - layout.content_width_mm()).abs() < 0.01);
    }

    #[test]
    fn test_rows_per_page() {
        let layout = PdfLayout::a4();
        assert_eq!(layout.rows_on_first_page(), 14);
        assert_eq!(layout.rows_on_following_pages(), 37);
    }

    #[test]
    fn test_table_pages_cover_all_rows() {
        let layout = PdfLayout::a4();
        let pages = layout.table_pages(100);
        assert_eq!(pages[0], 0..14);
        assert_eq!(pages[1], 14..51);
        assert_eq!(pages.last().map(|r| r.end), Some(100));
        let covered: usize = pages.iter().map(|r| r.len()).sum();
        assert_eq!(covered, 100);
    }

    #[test]
    fn test_table_pages_empty() {
        let pages = PdfLayout::a4().table_pages(0);
        assert_eq!(pages, vec![0..0]);
    }

    #[test]
    fn test_text_width_estimate() {
        let latin = estimate_text_width_mm("1,000", 10.0);
        let hangul = estimate_text_width_mm("노출수", 10.0);
        assert!(hangul > latin * 0.5);
        assert!(latin > 0.0);
    }
}
