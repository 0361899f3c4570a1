use crate::error::{ReportError, Result};
use ad_report_common::assemble::{ParseOptions, ReportDefaults, DEFAULT_CAMPAIGN_NAME};
use ad_report_common::keywords::KeywordConfig;
use ad_report_common::pagination::DEFAULT_ROWS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// 광고주를 알 수 없을 때
pub const DEFAULT_ADVERTISER: &str = "GH Korea";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub default_advertiser: String,
    pub campaign_placeholder: String,
    pub rows_per_page: usize,
    /// 한글 출력을 위한 TTF/OTF 폰트
    pub font_path: Option<PathBuf>,
    pub keywords: KeywordConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            timeout_seconds: 60,
            default_advertiser: DEFAULT_ADVERTISER.into(),
            campaign_placeholder: DEFAULT_CAMPAIGN_NAME.into(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            font_path: None,
            keywords: KeywordConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 파일이 없으면 기본값
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("ad-report").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 환경 변수 우선
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ReportError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// 시트에 메타데이터가 없을 때 설정값으로 채우는 파싱 옵션
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            keywords: self.keywords.clone(),
            defaults: ReportDefaults {
                advertiser: self.default_advertiser.clone(),
                campaign_name: self.campaign_placeholder.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.rows_per_page, 20);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_advertiser": "Acme", "keywords": {"clicks": ["tap"]}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_advertiser, "Acme");
        assert_eq!(config.timeout_seconds, 60);
        assert!(config.keywords.clicks.matches("TAPS"));
        assert!(config.keywords.impressions.matches("노출"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            rows_per_page: 50,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.rows_per_page, 50);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ReportError::Config(_))));
    }

    #[test]
    fn test_parse_options_defaults() {
        let config = Config::default();
        let options = config.parse_options();
        assert_eq!(options.defaults.advertiser, DEFAULT_ADVERTISER);
        assert_eq!(options.defaults.campaign_name, "New Campaign Report");
    }
}
