//! 뷰어 데이터 패키지 출력 (zip 또는 디렉터리)

use crate::error::{ReportError, Result};
use ad_report_common::package::{build_package, PackageEntry};
use ad_report_common::ReportData;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::{SimpleFileOptions, ZipWriter};

/// 패키지 구성 입력
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    pub client_key: String,
    pub ai_insight: String,
    /// 배너 이미지 파일
    pub banners: Vec<PathBuf>,
}

pub fn package_file_name(client_key: &str) -> String {
    format!("Report_Package_{}.zip", client_key)
}

/// 이미지 파일을 data URL로
pub fn banner_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|_| ReportError::FileNotFound(path.display().to_string()))?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => return Err(ReportError::UnsupportedFormat(path.display().to_string())),
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// 패키지 파일 목록 생성
pub fn package_entries(report: &ReportData, options: &PackageOptions) -> Result<Vec<PackageEntry>> {
    let banners = options
        .banners
        .iter()
        .map(|path| banner_data_url(path))
        .collect::<Result<Vec<_>>>()?;
    Ok(build_package(report, &options.client_key, &options.ai_insight, banners)?)
}

/// zip 아카이브 바이트
pub fn zip_entries(entries: &[PackageEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        writer.start_file(entry.path.as_str(), options)?;
        writer.write_all(&entry.contents)?;
        debug!(path = %entry.path, bytes = entry.contents.len(), "zip 항목 추가");
    }

    Ok(writer.finish()?.into_inner())
}

/// zip 파일로 저장
pub async fn write_zip(entries: &[PackageEntry], output_path: &Path) -> Result<()> {
    let bytes = zip_entries(entries)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output_path, bytes).await?;
    Ok(())
}

/// 디렉터리에 풀어서 저장 (root/data/<key>/...)
pub async fn write_dir(entries: &[PackageEntry], root: &Path) -> Result<()> {
    for entry in entries {
        let path = root.join(&entry.path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &entry.contents).await?;
    }
    Ok(())
}
