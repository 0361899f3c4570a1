//! 필드별 키워드 세트
//!
//! 각 논리 필드(노출・클릭・상품・날짜・광고주・캠페인・기간)를 찾기 위한
//! 토큰 목록. 정규화된 셀 문자열이 토큰 중 하나를 "포함"하면 매칭된다.
//! 설정 파일에서 교체할 수 있고, 토큰은 생성 시점에 정규화된다.

use crate::normalizer::normalize_str;
use serde::{Deserialize, Serialize};

pub const IMPRESSION_KEYWORDS: &[&str] = &["노출", "IMPRESSION", "IMP", "VIEW"];
pub const CLICK_KEYWORDS: &[&str] = &["클릭", "CLICK"];
pub const PRODUCT_KEYWORDS: &[&str] = &["상품", "PRODUCT", "광고", "소재", "캠페인"];
pub const DATE_KEYWORDS: &[&str] = &["날짜", "DATE", "일자", "시작"];
pub const ADVERTISER_KEYWORDS: &[&str] = &["광고주", "ADVERTISER", "CLIENT"];
pub const CAMPAIGN_KEYWORDS: &[&str] = &["캠페인", "CAMPAIGN", "REPORT"];
pub const PERIOD_KEYWORDS: &[&str] = &["기간", "PERIOD", "DATE"];

/// 정규화된 토큰 목록
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    tokens: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for token in tokens {
            let token = normalize_str(token.as_ref());
            if !token.is_empty() && !normalized.contains(&token) {
                normalized.push(token);
            }
        }
        Self { tokens: normalized }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 정규화된 문자열이 토큰 하나라도 포함하면 true
    pub fn matches(&self, normalized: &str) -> bool {
        self.tokens.iter().any(|token| normalized.contains(token.as_str()))
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(tokens: Vec<String>) -> Self {
        KeywordSet::new(tokens)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.tokens
    }
}

/// 전체 키워드 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordConfig {
    pub impressions: KeywordSet,
    pub clicks: KeywordSet,
    pub product: KeywordSet,
    pub date: KeywordSet,
    pub advertiser: KeywordSet,
    pub campaign: KeywordSet,
    pub period: KeywordSet,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            impressions: KeywordSet::new(IMPRESSION_KEYWORDS),
            clicks: KeywordSet::new(CLICK_KEYWORDS),
            product: KeywordSet::new(PRODUCT_KEYWORDS),
            date: KeywordSet::new(DATE_KEYWORDS),
            advertiser: KeywordSet::new(ADVERTISER_KEYWORDS),
            campaign: KeywordSet::new(CAMPAIGN_KEYWORDS),
            period: KeywordSet::new(PERIOD_KEYWORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_normalized() {
        let set = KeywordSet::new(["imp ", "Click-Through", "", "IMP"]);
        assert_eq!(set.tokens(), &["IMP".to_string(), "CLICKTHROUGH".to_string()]);
    }

    #[test]
    fn test_substring_match() {
        let set = KeywordSet::new(IMPRESSION_KEYWORDS);
        assert!(set.matches("노출수"));
        assert!(set.matches("IMPRESSIONS"));
        assert!(set.matches("PAGEVIEWS"));
        assert!(!set.matches("클릭수"));
        assert!(!set.matches(""));
    }

    #[test]
    fn test_empty_set_never_matches() {
        let set = KeywordSet::default();
        assert!(set.is_empty());
        assert!(!set.matches("ANYTHING"));
    }

    #[test]
    fn test_config_partial_override() {
        let json = r#"{"impressions": ["impr"], "clicks": ["tap"]}"#;
        let config: KeywordConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.impressions.tokens(), &["IMPR".to_string()]);
        assert_eq!(config.clicks.tokens(), &["TAP".to_string()]);
        // 지정하지 않은 필드는 기본값
        assert!(config.advertiser.matches("광고주"));
    }
}
