//! 보고서 데이터 타입

use crate::normalizer::round2;
use serde::{Deserialize, Serialize};

/// 정규화된 데이터 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRow {
    /// 필터 후 1부터 매긴 순번
    pub no: usize,
    pub product: String,
    /// 원본 표기 그대로
    pub date: String,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
}

impl AdRow {
    /// CTR은 항상 노출/클릭에서 다시 계산
    pub fn new(no: usize, product: String, date: String, impressions: u64, clicks: u64) -> Self {
        Self {
            no,
            product,
            date,
            impressions,
            clicks,
            ctr: ctr(clicks, impressions),
        }
    }

    /// 시트에서 읽은 값으로 생성
    ///
    /// CTR은 읽은 값 그대로 계산하고, 건수는 정수로 반올림하되
    /// 양수 노출은 최소 1로 남긴다. 정수 입력이면 `new` 와 같다.
    pub fn from_measured(no: usize, product: String, date: String, impressions: f64, clicks: f64) -> Self {
        let clicks = if clicks.is_finite() { clicks.max(0.0) } else { 0.0 };
        Self {
            no,
            product,
            date,
            impressions: impressions.round().max(1.0) as u64,
            clicks: clicks.round() as u64,
            ctr: ctr_ratio(clicks, impressions),
        }
    }
}

/// 클릭률(%) 소수 둘째 자리, 노출 0이면 0
pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    ctr_ratio(clicks as f64, impressions as f64)
}

/// 시트 값 그대로의 클릭률 (노출이 양수가 아니면 0)
pub fn ctr_ratio(clicks: f64, impressions: f64) -> f64 {
    if impressions.is_nan() || impressions <= 0.0 {
        return 0.0;
    }
    round2(clicks / impressions * 100.0)
}

/// 캠페인 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub campaign_name: String,
    pub advertiser: String,
    pub period: String,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub avg_ctr: f64,
}

/// 파싱 결과 전체 (하위 출력 모두의 입력)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub summary: CampaignSummary,
    pub rows: Vec<AdRow>,
}

impl ReportData {
    /// 제목 변경 (빈 문자열은 무시)
    pub fn rename(&mut self, campaign_name: &str) {
        let name = campaign_name.trim();
        if !name.is_empty() {
            self.summary.campaign_name = name.to_string();
        }
    }

    pub fn set_advertiser(&mut self, advertiser: &str) {
        let advertiser = advertiser.trim();
        if !advertiser.is_empty() {
            self.summary.advertiser = advertiser.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctr_recomputed() {
        let row = AdRow::new(1, "배너".into(), "2026.01.01".into(), 300, 1);
        assert_eq!(row.ctr, 0.33);
    }

    #[test]
    fn test_from_measured_keeps_source_ratio() {
        let row = AdRow::from_measured(1, "B".into(), "-".into(), 1.5, 1.0);
        assert_eq!(row.impressions, 2);
        assert_eq!(row.clicks, 1);
        assert_eq!(row.ctr, 66.67);

        let small = AdRow::from_measured(2, "A".into(), "-".into(), 0.4, 0.0);
        assert_eq!(small.impressions, 1);
        assert_eq!(small.ctr, 0.0);
    }

    #[test]
    fn test_from_measured_matches_new_for_integers() {
        let measured = AdRow::from_measured(1, "A".into(), "-".into(), 300.0, 1.0);
        assert_eq!(measured, AdRow::new(1, "A".into(), "-".into(), 300, 1));
    }

    #[test]
    fn test_ctr_zero_impressions() {
        assert_eq!(ctr(5, 0), 0.0);
    }

    #[test]
    fn test_row_json_field_names() {
        let row = AdRow::new(1, "배너".into(), "-".into(), 100, 5);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["impressions"], 100);
        assert_eq!(json["ctr"], 5.0);
    }

    #[test]
    fn test_summary_json_is_camel_case() {
        let summary = CampaignSummary {
            campaign_name: "A".into(),
            advertiser: "B".into(),
            period: "-".into(),
            total_impressions: 10,
            total_clicks: 1,
            avg_ctr: 10.0,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"campaignName\""));
        assert!(json.contains("\"totalImpressions\""));
        assert!(json.contains("\"avgCtr\""));
    }

    #[test]
    fn test_rename_ignores_blank() {
        let mut report = ReportData {
            summary: CampaignSummary {
                campaign_name: "Old".into(),
                advertiser: "B".into(),
                period: "-".into(),
                total_impressions: 0,
                total_clicks: 0,
                avg_ctr: 0.0,
            },
            rows: vec![],
        };
        report.rename("   ");
        assert_eq!(report.summary.campaign_name, "Old");
        report.rename(" New Title ");
        assert_eq!(report.summary.campaign_name, "New Title");
    }
}
