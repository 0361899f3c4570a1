use ad_report::config::Config;
use ad_report::insight::generate_insight;
use ad_report_common::CampaignSummary;

#[tokio::test]
async fn gemini_insight_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let config = Config {
        api_key: Some(api_key),
        ..Config::default()
    };
    let summary = CampaignSummary {
        campaign_name: "Integration Test".to_string(),
        advertiser: "GH Korea".to_string(),
        period: "2026.01.01 ~ 2026.01.31".to_string(),
        total_impressions: 120_000,
        total_clicks: 840,
        avg_ctr: 0.7,
    };

    let text = generate_insight(&summary, &config).await.expect("Gemini 호출 실패");
    assert!(!text.trim().is_empty());
}
