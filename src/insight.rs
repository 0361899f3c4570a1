//! AI 인사이트 (Gemini generateContent)
//!
//! 실패해도 내보내기를 멈추지 않도록 `generate_or_fallback` 은 항상 문자열을 돌려준다.

use crate::config::Config;
use crate::error::{ReportError, Result};
use ad_report_common::prompts::{build_insight_prompt, INSIGHT_FALLBACK};
use ad_report_common::CampaignSummary;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub fn endpoint(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "temperature": 0.7
        }
    })
}

/// 응답 JSON에서 텍스트 추출 (여러 part는 이어 붙인다)
pub fn extract_text(payload: &Value) -> Result<String> {
    let parts = payload["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| ReportError::Insight("응답에 candidates가 없습니다".into()))?;

    let text: String = parts.iter().filter_map(|part| part["text"].as_str()).collect();
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ReportError::Insight("응답 텍스트가 비어 있습니다".into()));
    }
    Ok(text)
}

pub async fn generate_insight(summary: &CampaignSummary, config: &Config) -> Result<String> {
    let api_key = config.get_api_key()?;
    let prompt = build_insight_prompt(summary);
    debug!(model = %config.model, "인사이트 요청");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| ReportError::Insight(e.to_string()))?;

    let response = client
        .post(format!("{}?key={}", endpoint(&config.model), api_key))
        .json(&request_body(&prompt))
        .send()
        .await
        .map_err(|e| ReportError::Insight(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ReportError::Insight(format!("status {}: {}", status, body)));
    }

    let payload: Value = response.json().await.map_err(|e| ReportError::Insight(e.to_string()))?;
    extract_text(&payload)
}

/// 실패 시 경고 후 대체 문구
pub async fn generate_or_fallback(summary: &CampaignSummary, config: &Config) -> String {
    match generate_insight(summary, config).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "인사이트 생성 실패, 대체 문구 사용");
            INSIGHT_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_text() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "**좋은** 성과" }, { "text": "입니다." } ] } }
            ]
        });
        assert_eq!(extract_text(&payload).unwrap(), "**좋은** 성과입니다.");
    }

    #[test]
    fn test_extract_text_missing() {
        let payload = json!({ "error": { "message": "quota" } });
        assert!(matches!(extract_text(&payload), Err(ReportError::Insight(_))));
    }
}
