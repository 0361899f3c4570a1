//! 콘솔 출력 (요약・카드・표)

use ad_report_common::display::{is_good_ctr, table_cells, MetricCard, TABLE_HEADERS};
use ad_report_common::month::month_label;
use ad_report_common::{AdRow, CampaignSummary, Page};
use std::fmt::Write;

pub fn render_summary(summary: &CampaignSummary) -> String {
    format!(
        "📊 {}\n  광고주: {}\n  기간: {}\n",
        summary.campaign_name, summary.advertiser, summary.period
    )
}

pub fn render_cards(cards: &[MetricCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "  {:<11} {:>14}  ({})", card.label, card.value, card.sub_label);
    }
    out
}

pub fn render_months(months: &[String]) -> String {
    if months.is_empty() {
        return "  월 데이터 없음\n".to_string();
    }
    let labels: Vec<String> = months.iter().map(|m| format!("{} ({})", month_label(m), m)).collect();
    format!("  월: 전체, {}\n", labels.join(", "))
}

/// 현재 페이지의 표와 페이지 정보
pub fn render_table(rows: &[AdRow], page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:>4}  {:<16}  {:<18}  {:>12}  {:>10}  {:>8}",
        TABLE_HEADERS[0], TABLE_HEADERS[1], TABLE_HEADERS[2], "Imp", "Click", "CTR"
    );

    let visible = page.slice(rows);
    if visible.is_empty() {
        let _ = writeln!(out, "  No performance data available for this selection.");
    }
    for row in visible {
        let cells = table_cells(row);
        let mark = if is_good_ctr(row.ctr) { "▲" } else { " " };
        let _ = writeln!(
            out,
            "  {:>4}  {:<16}  {:<18}  {:>12}  {:>10}  {:>8}{}",
            cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], mark
        );
    }

    let _ = writeln!(out, "\n  {}", page.showing_label());
    if page.total_pages > 1 {
        let pages: Vec<String> = page
            .visible_pages()
            .into_iter()
            .map(|n| if n == page.number { format!("[{}]", n) } else { n.to_string() })
            .collect();
        let _ = writeln!(
            out,
            "  {} {} {}",
            if page.has_previous() { "‹" } else { " " },
            pages.join(" "),
            if page.has_next() { "›" } else { " " }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_paging() {
        let rows: Vec<AdRow> = (1..=25)
            .map(|i| AdRow::new(i, "배너".into(), format!("2026.02.{:02}", i), 1000, 1))
            .collect();
        let page = Page::new(rows.len(), 20, 2);
        let out = render_table(&rows, &page);
        assert!(out.contains("Showing 21-25 of 25 records"));
        assert!(out.contains("2026.02.21"));
        assert!(!out.contains("2026.02.20"));
        assert!(out.contains("[2]"));
    }

    #[test]
    fn test_render_table_empty() {
        let out = render_table(&[], &Page::new(0, 20, 1));
        assert!(out.contains("No performance data"));
    }

    #[test]
    fn test_render_months() {
        assert_eq!(render_months(&["02".into()]), "  월: 전체, 2월 (02)\n");
    }
}
