//! 파싱 파이프라인과 보고서 조립
//!
//! grid → 헤더 탐색 → 열 매핑 → 메타데이터 수집 → 행 추출 → ReportData

use crate::cell::Grid;
use crate::columns::map_columns;
use crate::error::{Error, Result};
use crate::header::{locate_header, normalized_row, HEADER_SCAN_ROWS};
use crate::keywords::KeywordConfig;
use crate::metadata::{scavenge_metadata, CampaignMetadata};
use crate::rows::{extract_rows, Totals};
use crate::types::{AdRow, CampaignSummary, ReportData};
use tracing::{debug, info};

/// 캠페인명을 찾지 못했을 때의 제목
pub const DEFAULT_CAMPAIGN_NAME: &str = "New Campaign Report";
/// 기간을 결정할 수 없을 때
pub const DEFAULT_PERIOD: &str = "-";

/// 메타데이터가 없을 때 채울 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDefaults {
    /// 직전 보고서의 광고주 등
    pub advertiser: String,
    pub campaign_name: String,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            advertiser: String::new(),
            campaign_name: DEFAULT_CAMPAIGN_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    pub keywords: KeywordConfig,
    pub defaults: ReportDefaults,
}

/// 시트 전체를 파싱해 ReportData 생성
pub fn parse_grid(grid: &Grid, options: &ParseOptions) -> Result<ReportData> {
    if grid.is_empty() {
        return Err(Error::EmptyGrid);
    }

    let keywords = &options.keywords;
    let header_row = locate_header(grid, &keywords.impressions, &keywords.clicks).ok_or(Error::HeaderNotFound {
        scanned: grid.row_count().min(HEADER_SCAN_ROWS),
    })?;
    debug!(header_row, "헤더 행 발견");

    let mapping = map_columns(&normalized_row(grid, header_row), keywords)?;
    debug!(?mapping, "열 매핑");

    let metadata = scavenge_metadata(grid, header_row, keywords);
    let rows = extract_rows(grid, header_row, &mapping)?;

    let report = assemble_report(metadata, rows, &options.defaults);
    info!(
        rows = report.rows.len(),
        impressions = report.summary.total_impressions,
        clicks = report.summary.total_clicks,
        "보고서 생성"
    );
    Ok(report)
}

/// 메타데이터와 행으로 ReportData 조립
pub fn assemble_report(metadata: CampaignMetadata, rows: Vec<AdRow>, defaults: &ReportDefaults) -> ReportData {
    let totals = Totals::from_rows(&rows);
    let period = metadata.period.unwrap_or_else(|| derived_period(&rows));

    ReportData {
        summary: CampaignSummary {
            campaign_name: metadata.campaign.unwrap_or_else(|| defaults.campaign_name.clone()),
            advertiser: metadata.advertiser.unwrap_or_else(|| defaults.advertiser.clone()),
            period,
            total_impressions: totals.impressions,
            total_clicks: totals.clicks,
            avg_ctr: totals.avg_ctr,
        },
        rows,
    }
}

/// "첫 행 날짜 ~ 마지막 행 날짜"
fn derived_period(rows: &[AdRow]) -> String {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => format!("{} ~ {}", first.date, last.date),
        _ => DEFAULT_PERIOD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn sample_grid() -> Grid {
        Grid::new(vec![
            vec![Cell::from("캠페인"), Cell::from("Spring Sale")],
            vec![Cell::from("광고주"), Cell::from("Acme")],
            vec![Cell::from("날짜"), Cell::from("노출"), Cell::from("클릭")],
            vec![Cell::from("2026.01.01"), Cell::from(100), Cell::from(5)],
            vec![Cell::from("2026.01.02"), Cell::from(200), Cell::from(10)],
            vec![Cell::from("2026.01.03"), Cell::from(300), Cell::from(15)],
        ])
    }

    #[test]
    fn test_end_to_end() {
        let report = parse_grid(&sample_grid(), &ParseOptions::default()).unwrap();
        let summary = &report.summary;
        assert_eq!(summary.campaign_name, "Spring Sale");
        assert_eq!(summary.advertiser, "Acme");
        assert_eq!(summary.period, "2026.01.01 ~ 2026.01.03");
        assert_eq!(summary.total_impressions, 600);
        assert_eq!(summary.total_clicks, 30);
        assert_eq!(summary.avg_ctr, 5.0);

        assert_eq!(report.rows.len(), 3);
        for row in &report.rows {
            assert_eq!(row.product, "기본배너");
            assert_eq!(row.ctr, 5.0);
        }
    }

    #[test]
    fn test_zero_impression_row_discarded_end_to_end() {
        let grid = Grid::new(vec![
            vec![Cell::from("캠페인"), Cell::from("Spring Sale")],
            vec![Cell::from("광고주"), Cell::from("Acme")],
            vec![Cell::from("날짜"), Cell::from("노출"), Cell::from("클릭")],
            vec![Cell::from("2026.01.01"), Cell::from(100), Cell::from(5)],
            vec![Cell::from("2026.01.02"), Cell::from(0), Cell::from(0)],
            vec![Cell::from("2026.01.03"), Cell::from(200), Cell::from(10)],
        ]);
        assert_eq!(
            locate_header(&grid, &KeywordConfig::default().impressions, &KeywordConfig::default().clicks),
            Some(2)
        );

        let report = parse_grid(&grid, &ParseOptions::default()).unwrap();
        assert_eq!(
            report.rows,
            vec![
                AdRow::new(1, "기본배너".into(), "2026.01.01".into(), 100, 5),
                AdRow::new(2, "기본배너".into(), "2026.01.03".into(), 200, 10),
            ]
        );
        assert_eq!(report.rows[0].ctr, 5.0);
        assert_eq!(report.rows[1].ctr, 5.0);

        let summary = &report.summary;
        assert_eq!(summary.advertiser, "Acme");
        assert_eq!(summary.campaign_name, "Spring Sale");
        assert_eq!(summary.total_impressions, 300);
        assert_eq!(summary.total_clicks, 15);
        assert_eq!(summary.avg_ctr, 5.0);
    }

    #[test]
    fn test_deterministic() {
        let options = ParseOptions::default();
        let a = parse_grid(&sample_grid(), &options).unwrap();
        let b = parse_grid(&sample_grid(), &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_totals_match_rows() {
        let report = parse_grid(&sample_grid(), &ParseOptions::default()).unwrap();
        let imp: u64 = report.rows.iter().map(|r| r.impressions).sum();
        let clk: u64 = report.rows.iter().map(|r| r.clicks).sum();
        assert_eq!(report.summary.total_impressions, imp);
        assert_eq!(report.summary.total_clicks, clk);
        assert!(report.rows.iter().all(|r| r.impressions > 0));
    }

    #[test]
    fn test_defaults_when_metadata_missing() {
        let grid = Grid::new(vec![
            vec![Cell::from("Impressions"), Cell::from("Clicks")],
            vec![Cell::from(10), Cell::from(1)],
        ]);
        let options = ParseOptions {
            defaults: ReportDefaults {
                advertiser: "GH Korea".into(),
                ..ReportDefaults::default()
            },
            ..ParseOptions::default()
        };
        let report = parse_grid(&grid, &options).unwrap();
        assert_eq!(report.summary.campaign_name, DEFAULT_CAMPAIGN_NAME);
        assert_eq!(report.summary.advertiser, "GH Korea");
        assert_eq!(report.summary.period, "- ~ -");
    }

    #[test]
    fn test_empty_grid() {
        let result = parse_grid(&Grid::default(), &ParseOptions::default());
        assert!(matches!(result, Err(Error::EmptyGrid)));
    }

    #[test]
    fn test_header_not_found() {
        let grid = Grid::new(vec![vec![Cell::from("날짜"), Cell::from("노출")]]);
        let result = parse_grid(&grid, &ParseOptions::default());
        assert!(matches!(result, Err(Error::HeaderNotFound { scanned: 1 })));
    }

    #[test]
    fn test_header_only_is_no_usable_data() {
        let grid = Grid::new(vec![vec![Cell::from("노출"), Cell::from("클릭")]]);
        let result = parse_grid(&grid, &ParseOptions::default());
        assert!(matches!(result, Err(Error::NoUsableData)));
    }

    #[test]
    fn test_custom_keywords() {
        let grid = Grid::new(vec![
            vec![Cell::from("Impr"), Cell::from("Taps")],
            vec![Cell::from(50), Cell::from(5)],
        ]);
        let mut options = ParseOptions::default();
        options.keywords.impressions = crate::keywords::KeywordSet::new(["impr"]);
        options.keywords.clicks = crate::keywords::KeywordSet::new(["tap"]);
        let report = parse_grid(&grid, &options).unwrap();
        assert_eq!(report.summary.avg_ctr, 10.0);
    }
}
