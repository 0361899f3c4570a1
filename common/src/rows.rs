//! 데이터 행 추출과 집계

use crate::cell::Grid;
use crate::columns::ColumnMapping;
use crate::error::{Error, Result};
use crate::normalizer::{extract_number, round2};
use crate::types::AdRow;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 상품 열이 없을 때의 상품명
pub const DEFAULT_PRODUCT: &str = "기본배너";
/// 날짜 열이 없을 때의 날짜
pub const DEFAULT_DATE: &str = "-";

/// 헤더 아래 행들을 AdRow로 변환
///
/// 노출수가 양수가 아닌 행(빈 행, 소계 라벨 등)은 버린다.
pub fn extract_rows(grid: &Grid, header_row: usize, mapping: &ColumnMapping) -> Result<Vec<AdRow>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for index in (header_row + 1)..grid.row_count() {
        let impressions = extract_number(grid.cell(index, mapping.impressions));
        if !(impressions.is_finite() && impressions > 0.0) {
            skipped += 1;
            continue;
        }
        let clicks = extract_number(grid.cell(index, mapping.clicks));
        let product = label(grid, index, mapping.product, DEFAULT_PRODUCT);
        let date = label(grid, index, mapping.date, DEFAULT_DATE);

        rows.push(AdRow::from_measured(rows.len() + 1, product, date, impressions, clicks));
    }

    debug!(kept = rows.len(), skipped, "데이터 행 추출");

    if rows.is_empty() {
        return Err(Error::NoUsableData);
    }
    Ok(rows)
}

fn label(grid: &Grid, row: usize, column: Option<usize>, fallback: &str) -> String {
    let Some(column) = column else {
        return fallback.to_string();
    };
    let value = grid.cell(row, column).to_display_string().trim().to_string();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// 행 집합의 합계
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub impressions: u64,
    pub clicks: u64,
    pub avg_ctr: f64,
}

impl Totals {
    /// 노출 합계가 0이면 평균 CTR도 0
    pub fn from_rows(rows: &[AdRow]) -> Self {
        let impressions: u64 = rows.iter().map(|r| r.impressions).sum();
        let clicks: u64 = rows.iter().map(|r| r.clicks).sum();
        let avg_ctr = if impressions == 0 {
            0.0
        } else {
            round2(clicks as f64 / impressions as f64 * 100.0)
        };
        Self {
            impressions,
            clicks,
            avg_ctr,
        }
    }
}
