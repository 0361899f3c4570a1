//! 뷰어용 데이터 패키지 구성
//!
//! ```text
//! data/<clientKey>/index.json   요약 + 월 목록 + 인사이트 + 배너
//! data/<clientKey>/<month>.json 해당 월의 행
//! ```

use crate::error::{Error, Result};
use crate::month::{available_months, MonthFilter};
use crate::types::{AdRow, CampaignSummary, ReportData};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DATA_ROOT: &str = "data";
pub const INDEX_FILE: &str = "index.json";

/// index.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageIndex {
    pub summary: CampaignSummary,
    pub months: Vec<String>,
    #[serde(default)]
    pub ai_insight: String,
    /// data URL 목록
    #[serde(default)]
    pub banners: Vec<String>,
}

/// 패키지 안의 파일 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// `/` 구분 상대 경로
    pub path: String,
    pub contents: Vec<u8>,
}

/// 클라이언트 키 (URL에 그대로 쓸 수 있는 소문자 식별자)
///
/// 공백 묶음은 `_`, 영숫자・`_`・`-` 외 문자는 제거.
pub fn client_key(raw: &str) -> Result<String> {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join("_");
    let key: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if key.is_empty() || key.chars().all(|c| c == '_' || c == '-') {
        return Err(Error::InvalidClientKey(raw.to_string()));
    }
    Ok(key)
}

pub fn client_dir(key: &str) -> String {
    format!("{}/{}", DATA_ROOT, key)
}

pub fn index_path(key: &str) -> String {
    format!("{}/{}", client_dir(key), INDEX_FILE)
}

pub fn month_path(key: &str, month: &str) -> String {
    format!("{}/{}.json", client_dir(key), month)
}

/// ReportData를 패키지 파일 목록으로 변환
pub fn build_package(report: &ReportData, key: &str, ai_insight: &str, banners: Vec<String>) -> Result<Vec<PackageEntry>> {
    let months = available_months(&report.rows);
    let index = PackageIndex {
        summary: report.summary.clone(),
        months: months.clone(),
        ai_insight: ai_insight.to_string(),
        banners,
    };

    let mut entries = vec![PackageEntry {
        path: index_path(key),
        contents: serde_json::to_vec_pretty(&index)?,
    }];

    for month in months {
        let rows: Vec<AdRow> = MonthFilter::Month(month.clone()).filter_rows(&report.rows);
        debug!(month = %month, rows = rows.len(), "월별 데이터");
        entries.push(PackageEntry {
            path: month_path(key, &month),
            contents: serde_json::to_vec_pretty(&rows)?,
        });
    }

    Ok(entries)
}
