//! 헤더 행 탐색
//!
//! 보고서 상단에는 제목・메타데이터 행이 몇 줄 있을지 알 수 없으므로,
//! 노출 키워드와 클릭 키워드가 같은 행에 함께 나타나는 첫 행을 헤더로 본다.

use crate::cell::Grid;
use crate::keywords::KeywordSet;
use crate::normalizer::normalize_token;

/// 헤더를 찾는 최대 행 수
pub const HEADER_SCAN_ROWS: usize = 50;

/// 헤더 행 인덱스 (없으면 None)
pub fn locate_header(grid: &Grid, impressions: &KeywordSet, clicks: &KeywordSet) -> Option<usize> {
    let limit = grid.row_count().min(HEADER_SCAN_ROWS);
    (0..limit).find(|&index| {
        let joined = normalized_row(grid, index).join("|");
        impressions.matches(&joined) && clicks.matches(&joined)
    })
}

/// 행의 각 셀을 정규화
pub fn normalized_row(grid: &Grid, index: usize) -> Vec<String> {
    grid.row(index).iter().map(normalize_token).collect()
}
