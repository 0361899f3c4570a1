//! 헤더 위쪽 영역에서 캠페인 메타데이터 수집
//!
//! `광고주 | GH Korea` 처럼 라벨 셀 바로 오른쪽(또는 한 칸 건너)에 값이
//! 있는 배치를 가정한다.

use crate::cell::Grid;
use crate::keywords::{KeywordConfig, KeywordSet};
use crate::normalizer::normalize_token;

/// 수집된 메타데이터 (찾지 못한 필드는 None)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignMetadata {
    pub advertiser: Option<String>,
    pub campaign: Option<String>,
    pub period: Option<String>,
}

pub fn scavenge_metadata(grid: &Grid, header_row: usize, keywords: &KeywordConfig) -> CampaignMetadata {
    CampaignMetadata {
        advertiser: find_labeled_value(grid, header_row, &keywords.advertiser),
        campaign: find_labeled_value(grid, header_row, &keywords.campaign),
        period: find_labeled_value(grid, header_row, &keywords.period),
    }
}

/// 라벨과 매칭되는 첫 셀의 값
///
/// 첫 매칭에서 탐색을 끝내므로, 그 옆 두 칸이 모두 비어 있으면 None.
pub fn find_labeled_value(grid: &Grid, header_row: usize, labels: &KeywordSet) -> Option<String> {
    for row in 0..header_row.min(grid.row_count()) {
        for (col, cell) in grid.row(row).iter().enumerate() {
            if !labels.matches(&normalize_token(cell)) {
                continue;
            }
            let value = [col + 1, col + 2]
                .into_iter()
                .map(|c| grid.cell(row, c))
                .find(|candidate| !candidate.is_empty())
                .map(|candidate| candidate.to_display_string().trim().to_string())
                .unwrap_or_default();
            return if value.is_empty() { None } else { Some(value) };
        }
    }
    None
}
