pub mod package;
pub mod pdf;

use ad_report_common::export::pdf_core::pdf_file_name;
use ad_report_common::ReportData;
use std::path::{Path, PathBuf};

/// 출력 경로 결정 (디렉터리면 기본 파일명을 붙인다)
pub fn output_path_for(output: Option<&Path>, default_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(default_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    }
}

/// 오늘 날짜의 PDF 기본 파일명
pub fn default_pdf_name(report: &ReportData) -> String {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    pdf_file_name(&report.summary.advertiser, &today)
}
