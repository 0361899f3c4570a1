//! 읽기 전용 뷰어
//!
//! 패키지를 푼 디렉터리에서 `data/<client>/index.json` 과 월별 JSON을 읽는다.

use crate::error::{ReportError, Result};
use ad_report_common::package::{client_key, index_path, month_path, PackageIndex};
use ad_report_common::{AdRow, MonthFilter};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CLIENT: &str = "demo";

/// 뷰어 화면 데이터
#[derive(Debug, Clone)]
pub struct ViewerData {
    pub index: PackageIndex,
    pub month: MonthFilter,
    /// 선택한 월의 행 (전체 보기에서는 비어 있음)
    pub rows: Vec<AdRow>,
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ReportError::ViewerData(format!("{}: {}", path.display(), e)))?;
    serde_json::from_slice(&bytes).map_err(|e| ReportError::ViewerData(format!("{}: {}", path.display(), e)))
}

/// `client` 는 패키지 생성 때와 같은 규칙으로 키로 바꾼 뒤 사용한다
pub async fn load_view(root: &Path, client: &str, month: &MonthFilter) -> Result<ViewerData> {
    let client = &client_key(client)?;
    let index: PackageIndex = read_json(&root.join(index_path(client))).await?;
    debug!(client, months = ?index.months, "인덱스 로드");

    let rows = match month {
        MonthFilter::All => Vec::new(),
        MonthFilter::Month(m) => {
            if !index.months.contains(m) {
                return Err(ReportError::ViewerData(format!(
                    "{}월 데이터가 없습니다 (가능: {})",
                    m,
                    index.months.join(", ")
                )));
            }
            read_json(&root.join(month_path(client, m))).await?
        }
    };

    Ok(ViewerData {
        index,
        month: month.clone(),
        rows,
    })
}
