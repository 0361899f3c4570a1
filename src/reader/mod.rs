//! 입력 파일 읽기
//!
//! 스프레드시트/CSV는 첫 시트를 Grid로 읽어 파싱 엔진에 넘기고,
//! 저장된 보고서 JSON은 그대로 ReportData로 불러온다.

mod delimited;
mod workbook;

pub use delimited::parse_delimited;
pub use workbook::{data_to_cell, excel_serial_to_date};

use crate::error::{ReportError, Result};
use ad_report_common::{parse_grid, Grid, ParseOptions, ReportData};
use std::path::Path;
use tracing::{debug, info};

/// 입력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// xlsx / xlsm / xlsb / xls / ods
    Workbook,
    Delimited(char),
    /// 저장된 ReportData
    ReportJson,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            "csv" | "txt" => Ok(InputFormat::Delimited(',')),
            "tsv" => Ok(InputFormat::Delimited('\t')),
            "json" => Ok(InputFormat::ReportJson),
            _ => Err(ReportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 파일 전체를 메모리로 읽기
async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }
    let bytes = tokio::fs::read(path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "파일 읽기");
    Ok(bytes)
}

/// 시트를 Grid로 읽기
pub async fn read_grid(path: &Path) -> Result<Grid> {
    let format = InputFormat::from_path(path)?;
    if format == InputFormat::ReportJson {
        return Err(ReportError::UnsupportedFormat(path.display().to_string()));
    }
    let bytes = read_bytes(path).await?;
    grid_from_bytes(&bytes, format)
}

pub fn grid_from_bytes(bytes: &[u8], format: InputFormat) -> Result<Grid> {
    match format {
        InputFormat::Workbook => workbook::read_first_sheet(bytes),
        InputFormat::Delimited(delimiter) => parse_delimited(&String::from_utf8_lossy(bytes), delimiter),
        InputFormat::ReportJson => Err(ReportError::UnsupportedFormat("json".into())),
    }
}

/// 입력 파일에서 ReportData 생성
pub async fn load_report(path: &Path, options: &ParseOptions) -> Result<ReportData> {
    let format = InputFormat::from_path(path)?;
    let bytes = read_bytes(path).await?;

    let report = match format {
        InputFormat::ReportJson => serde_json::from_slice::<ReportData>(&bytes)?,
        _ => {
            let grid = grid_from_bytes(&bytes, format)?;
            debug!(rows = grid.row_count(), "시트 로드");
            parse_grid(&grid, options)?
        }
    };

    info!(path = %path.display(), rows = report.rows.len(), "보고서 로드 완료");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.XLSX")).unwrap(), InputFormat::Workbook);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.ods")).unwrap(), InputFormat::Workbook);
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.csv")).unwrap(), InputFormat::Delimited(','));
        assert_eq!(InputFormat::from_path(&PathBuf::from("a.tsv")).unwrap(), InputFormat::Delimited('\t'));
        assert_eq!(InputFormat::from_path(&PathBuf::from("r.json")).unwrap(), InputFormat::ReportJson);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = InputFormat::from_path(&PathBuf::from("report.pdf"));
        assert!(matches!(result, Err(ReportError::UnsupportedFormat(_))));
        assert!(InputFormat::from_path(&PathBuf::from("noext")).is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = read_grid(&PathBuf::from("/nonexistent/report.xlsx")).await;
        assert!(matches!(result, Err(ReportError::FileNotFound(_))));
    }
}
