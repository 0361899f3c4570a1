//! 프롬프트 생성 모듈
//!
//! 캠페인 요약을 바탕으로 AI 인사이트(3문장 진단)를 요청하는 프롬프트.

use crate::types::CampaignSummary;

/// 인사이트 생성에 실패했을 때 쓰는 문구
pub const INSIGHT_FALLBACK: &str = "분석을 생성할 수 없습니다.";

/// 인사이트 요청 프롬프트
pub fn build_insight_prompt(summary: &CampaignSummary) -> String {
    format!(
        r#"광고 분석 보고서 요약 요청:
광고주: {advertiser}
캠페인: {campaign}
성과: 노출 {impressions}, 클릭 {clicks}, CTR {ctr}%

전문 마케터의 시선에서 성과를 3문장으로 요약하고, **강조**를 사용하여 신뢰감 있는 한국어로 작성해주세요."#,
        advertiser = summary.advertiser,
        campaign = summary.campaign_name,
        impressions = summary.total_impressions,
        clicks = summary.total_clicks,
        ctr = summary.avg_ctr,
    )
}
