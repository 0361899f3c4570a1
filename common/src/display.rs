//! 표시용 문자열 (요약 카드・표・차트 축)
//!
//! CLI 출력과 PDF가 같은 문자열을 쓰도록 여기서 만든다.

use crate::month::{month_label, MonthFilter};
use crate::rows::Totals;
use crate::types::AdRow;

/// CTR 강조 기준 (%)
pub const CTR_HIGHLIGHT_THRESHOLD: f64 = 0.1;

/// 요약 카드 하나
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub sub_label: String,
}

/// 필터된 행으로 Impressions / Clicks / Efficiency 카드 생성
pub fn metric_cards(rows: &[AdRow], filter: &MonthFilter) -> Vec<MetricCard> {
    let totals = Totals::from_rows(rows);
    let scope = match filter {
        MonthFilter::All => None,
        MonthFilter::Month(month) => Some(month_label(month)),
    };
    let sub = |cumulative: &str, monthly: &str| match &scope {
        None => cumulative.to_string(),
        Some(label) => format!("{} {}", label, monthly),
    };

    vec![
        MetricCard {
            label: "Impressions",
            value: format_count(totals.impressions),
            sub_label: sub("누적 노출량", "노출량"),
        },
        MetricCard {
            label: "Clicks",
            value: format_count(totals.clicks),
            sub_label: sub("누적 클릭량", "클릭량"),
        },
        MetricCard {
            label: "Efficiency",
            value: format_ctr(totals.avg_ctr),
            sub_label: sub("평균 클릭율", "클릭율"),
        },
    ]
}

/// 천 단위 구분 (`1234567` → `"1,234,567"`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `"0.35%"`
pub fn format_ctr(ctr: f64) -> String {
    format!("{:.2}%", ctr)
}

pub fn is_good_ctr(ctr: f64) -> bool {
    ctr > CTR_HIGHLIGHT_THRESHOLD
}

/// 차트 x축 라벨: `"2026.02.06 (금)"` → `"02.06 (26)"`
pub fn axis_label(date: &str) -> String {
    let date_part = date.split(' ').next().unwrap_or_default();
    let parts: Vec<&str> = date_part.split(['.', '-']).collect();
    if parts.len() >= 3 {
        let year_short: String = parts[0].chars().skip(2).collect();
        format!("{}.{} ({})", parts[1], parts[2], year_short)
    } else {
        date.to_string()
    }
}

/// 표의 한 행 (No, 상품, 날짜, 노출, 클릭, CTR)
pub fn table_cells(row: &AdRow) -> [String; 6] {
    [
        row.no.to_string(),
        row.product.clone(),
        row.date.clone(),
        format_count(row.impressions),
        format_count(row.clicks),
        format_ctr(row.ctr),
    ]
}

pub const TABLE_HEADERS: [&str; 6] = ["No.", "광고상품", "날짜", "노출수 (Imp)", "클릭수 (Click)", "CTR (%)"];
