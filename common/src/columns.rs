//! 열 매핑

use crate::error::{Error, Result};
use crate::keywords::{KeywordConfig, KeywordSet};

/// 논리 필드 → 열 인덱스
///
/// 상품/날짜는 없을 수 있고, 노출/클릭은 반드시 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub product: Option<usize>,
    pub date: Option<usize>,
    pub impressions: usize,
    pub clicks: usize,
}

/// 키워드를 포함하는 첫 번째 열
pub fn find_column(header: &[String], keywords: &KeywordSet) -> Option<usize> {
    header.iter().position(|cell| keywords.matches(cell))
}

/// 정규화된 헤더 행에서 각 필드의 열을 결정
pub fn map_columns(header: &[String], keywords: &KeywordConfig) -> Result<ColumnMapping> {
    let impressions = find_column(header, &keywords.impressions).ok_or(Error::MissingColumn("impressions"))?;
    let clicks = find_column(header, &keywords.clicks).ok_or(Error::MissingColumn("clicks"))?;

    Ok(ColumnMapping {
        product: find_column(header, &keywords.product),
        date: find_column(header, &keywords.date),
        impressions,
        clicks,
    })
}
