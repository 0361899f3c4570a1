//! PDF export core utilities (위치 계산과 차트 데이터)

use crate::display::{axis_label, is_good_ctr};
use crate::layout::{PdfLayout, TABLE_COLUMN_WIDTHS_MM};
use crate::types::AdRow;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r#"[/\\?%*:|"<>]"#).unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// PDF 블록 위치 (mm, 각 블록의 위쪽 y)
#[derive(Debug, Clone)]
pub struct PdfLayoutCore {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub content_width_mm: f32,
    pub title_top_mm: f32,
    pub cards_top_mm: f32,
    pub impressions_chart_top_mm: f32,
    pub ctr_chart_top_mm: f32,
    pub chart_height_mm: f32,
    pub card_height_mm: f32,
    pub first_table_top_mm: f32,
    pub following_table_top_mm: f32,
    pub table_header_height_mm: f32,
    pub table_row_height_mm: f32,
}

impl PdfLayoutCore {
    pub fn from_layout(layout: &PdfLayout) -> Self {
        let title_top_mm = layout.page_height_mm - layout.margin_mm;
        let cards_top_mm = title_top_mm - layout.title_height_mm - layout.block_gap_mm;
        let impressions_chart_top_mm = cards_top_mm - layout.card_height_mm - layout.block_gap_mm;
        let ctr_chart_top_mm = impressions_chart_top_mm - layout.chart_height_mm - layout.block_gap_mm;
        let first_table_top_mm = ctr_chart_top_mm - layout.chart_height_mm - layout.block_gap_mm;

        Self {
            page_width_mm: layout.page_width_mm,
            page_height_mm: layout.page_height_mm,
            margin_mm: layout.margin_mm,
            content_width_mm: layout.content_width_mm(),
            title_top_mm,
            cards_top_mm,
            impressions_chart_top_mm,
            ctr_chart_top_mm,
            chart_height_mm: layout.chart_height_mm,
            card_height_mm: layout.card_height_mm,
            first_table_top_mm,
            following_table_top_mm: title_top_mm,
            table_header_height_mm: layout.table_header_height_mm,
            table_row_height_mm: layout.table_row_height_mm,
        }
    }

    pub fn table_top_mm(&self, first_page: bool) -> f32 {
        if first_page {
            self.first_table_top_mm
        } else {
            self.following_table_top_mm
        }
    }

    /// 표 행(slot)의 아래쪽 y
    pub fn row_bottom_mm(&self, first_page: bool, slot: usize) -> f32 {
        self.table_top_mm(first_page) - self.table_header_height_mm - (slot + 1) as f32 * self.table_row_height_mm
    }

    /// 표 열의 왼쪽 x
    pub fn column_x_mm(&self, column: usize) -> f32 {
        self.margin_mm + TABLE_COLUMN_WIDTHS_MM.iter().take(column).sum::<f32>()
    }

    /// 요약 카드의 왼쪽 x (3등분)
    pub fn card_x_mm(&self, index: usize) -> f32 {
        self.margin_mm + self.content_width_mm / 3.0 * index as f32
    }

    /// 막대 n개를 차트 폭에 배치했을 때 (x, 폭)
    pub fn bar_slots(&self, count: usize) -> Vec<(f32, f32)> {
        if count == 0 {
            return Vec::new();
        }
        let slot = self.content_width_mm / count as f32;
        let width = (slot * 0.7).max(0.3);
        (0..count)
            .map(|i| (self.margin_mm + slot * i as f32 + (slot - width) / 2.0, width))
            .collect()
    }
}

/// 차트 한 점
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub impressions: u64,
    pub ctr: f64,
    /// CTR 강조 여부
    pub good: bool,
}

pub fn chart_points(rows: &[AdRow]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| ChartPoint {
            label: axis_label(&row.date),
            impressions: row.impressions,
            ctr: row.ctr,
            good: is_good_ctr(row.ctr),
        })
        .collect()
}

/// 최대값 대비 높이 (최대값 0이면 0)
pub fn scaled_height(value: f64, max: f64, full_height_mm: f32) -> f32 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    ((value / max).clamp(0.0, 1.0) as f32) * full_height_mm
}

/// `Ad_Report_<advertiser>_<date>.pdf`
///
/// 파일명에 쓸 수 없는 문자는 `-`, 공백은 `_` 로 바꾼다.
pub fn pdf_file_name(advertiser: &str, date: &str) -> String {
    let safe = UNSAFE_FILE_CHARS.replace_all(advertiser.trim(), "-");
    let safe = WHITESPACE_RUN.replace_all(&safe, "_");
    format!("Ad_Report_{}_{}.pdf", safe, date)
}
