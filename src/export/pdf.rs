use crate::error::{ReportError, Result};
use ad_report_common::display::{is_good_ctr, metric_cards, table_cells, TABLE_HEADERS};
use ad_report_common::export::pdf_core::{chart_points, scaled_height, ChartPoint, PdfLayoutCore};
use ad_report_common::layout::{estimate_text_width_mm, PdfLayout, TABLE_COLUMN_WIDTHS_MM};
use ad_report_common::{AdRow, MonthFilter, ReportData};
use printpdf::*;
use std::path::Path;
use tracing::{debug, warn};

/// 내장 폰트용 표 헤더 (Latin-1만 가능)
const TABLE_HEADERS_LATIN: [&str; 6] = ["No.", "Product", "Date", "Impressions", "Clicks", "CTR (%)"];
/// 오른쪽 정렬 열
const NUMERIC_COLUMNS: [bool; 6] = [false, false, false, true, true, true];
/// x축 라벨 최대 개수
const MAX_AXIS_LABELS: usize = 8;
const EMPTY_TABLE_MESSAGE: &str = "No performance data available for this selection.";

const INK: (u8, u8, u8) = (30, 41, 59);
const MUTED: (u8, u8, u8) = (148, 163, 184);
const PANEL: (u8, u8, u8) = (241, 245, 249);
const INDIGO: (u8, u8, u8) = (79, 70, 229);
const EMERALD: (u8, u8, u8) = (16, 185, 129);

/// 텍스트 폰트 (TTF 지정 시 한글 출력 가능)
enum PdfFont {
    Builtin,
    Embedded(FontId),
}

impl PdfFont {
    fn load(doc: &mut PdfDocument, font_path: Option<&Path>) -> Result<Self> {
        let Some(path) = font_path else {
            return Ok(PdfFont::Builtin);
        };
        let bytes = std::fs::read(path)
            .map_err(|e| ReportError::PdfGeneration(format!("폰트 읽기 실패 {}: {}", path.display(), e)))?;
        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(&bytes, 0, &mut warnings)
            .ok_or_else(|| ReportError::PdfGeneration(format!("폰트를 해석할 수 없습니다: {}", path.display())))?;
        debug!(path = %path.display(), "폰트 임베드");
        Ok(PdfFont::Embedded(doc.add_font(&parsed)))
    }

    fn is_unicode(&self) -> bool {
        matches!(self, PdfFont::Embedded(_))
    }

    fn text(&self, ops: &mut Vec<Op>, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point::new(Mm(x), Mm(y)),
        });
        match self {
            PdfFont::Builtin => {
                let font = if bold { BuiltinFont::HelveticaBold } else { BuiltinFont::Helvetica };
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(size),
                    font: font.clone(),
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(latin1(text))],
                    font,
                });
            }
            PdfFont::Embedded(id) => {
                ops.push(Op::SetFontSize {
                    size: Pt(size),
                    font: id.clone(),
                });
                ops.push(Op::WriteText {
                    items: vec![TextItem::Text(text.to_string())],
                    font: id.clone(),
                });
            }
        }
        ops.push(Op::EndTextSection);
    }

    /// 오른쪽 끝을 right 에 맞춘 텍스트
    fn text_right(&self, ops: &mut Vec<Op>, text: &str, size: f32, right: f32, y: f32) {
        let x = right - estimate_text_width_mm(text, size);
        self.text(ops, text, size, x, y, false);
    }
}

/// 내장 폰트로 표현할 수 없는 문자는 `?`
fn latin1(text: &str) -> String {
    text.chars().map(|c| if (c as u32) <= 0xFF { c } else { '?' }).collect()
}

fn color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb {
        r: f32::from(r) / 255.0,
        g: f32::from(g) / 255.0,
        b: f32::from(b) / 255.0,
        icc_profile: None,
    })
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point::new(Mm(x), Mm(y)),
        bezier: false,
    }
}

fn fill_color(ops: &mut Vec<Op>, rgb: (u8, u8, u8)) {
    ops.push(Op::SetFillColor { col: color(rgb) });
}

fn fill_polygon(ops: &mut Vec<Op>, points: Vec<LinePoint>, rgb: (u8, u8, u8)) {
    fill_color(ops, rgb);
    ops.push(Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        },
    });
}

fn fill_rect(ops: &mut Vec<Op>, x: f32, y: f32, w: f32, h: f32, rgb: (u8, u8, u8)) {
    fill_polygon(
        ops,
        vec![point(x, y), point(x + w, y), point(x + w, y + h), point(x, y + h)],
        rgb,
    );
}

fn hline(ops: &mut Vec<Op>, x1: f32, x2: f32, y: f32, rgb: (u8, u8, u8)) {
    ops.push(Op::SetOutlineColor { col: color(rgb) });
    ops.push(Op::SetOutlineThickness { pt: Pt(0.5) });
    ops.push(Op::DrawLine {
        line: Line {
            points: vec![point(x1, y), point(x2, y)],
            is_closed: false,
        },
    });
}

/// PDF 생성 후 파일로 저장
pub fn generate_pdf(report: &ReportData, filter: &MonthFilter, output_path: &Path, font_path: Option<&Path>) -> Result<()> {
    let bytes = render_pdf(report, filter, font_path)?;
    std::fs::write(output_path, bytes)?;
    Ok(())
}

/// 현재 화면(필터된 행)을 A4 PDF 바이트로
///
/// 네비게이션・월 필터・AI 인사이트는 그리지 않는다.
pub fn render_pdf(report: &ReportData, filter: &MonthFilter, font_path: Option<&Path>) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(&report.summary.campaign_name);
    let font = PdfFont::load(&mut doc, font_path)?;
    if !font.is_unicode() {
        warn!("font_path 미설정: 내장 폰트를 사용하므로 한글은 '?'로 표시됩니다");
    }

    let rows = filter.filter_rows(&report.rows);
    let layout = PdfLayout::a4();
    let core = PdfLayoutCore::from_layout(&layout);
    let table_pages = layout.table_pages(rows.len());
    let total_pages = table_pages.len();

    let mut pages = Vec::with_capacity(total_pages);
    for (index, range) in table_pages.into_iter().enumerate() {
        let first_page = index == 0;
        let mut ops = Vec::new();

        if first_page {
            draw_summary(&mut ops, &core, &font, report, &rows, filter);
            let points = chart_points(&rows);
            draw_impressions_chart(&mut ops, &core, &font, &points);
            draw_ctr_chart(&mut ops, &core, &font, &points);
        }
        draw_table(&mut ops, &core, &font, &rows[range], first_page);
        draw_page_number(&mut ops, &core, &font, index + 1, total_pages);

        pages.push(PdfPage::new(Mm(core.page_width_mm), Mm(core.page_height_mm), ops));
    }

    let mut warnings = Vec::new();
    let bytes = doc.with_pages(pages).save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        debug!(count = warnings.len(), "PDF 저장 경고");
    }
    debug!(pages = total_pages, bytes = bytes.len(), "PDF 렌더링 완료");
    Ok(bytes)
}

fn draw_summary(
    ops: &mut Vec<Op>,
    core: &PdfLayoutCore,
    font: &PdfFont,
    report: &ReportData,
    rows: &[AdRow],
    filter: &MonthFilter,
) {
    let left = core.margin_mm;
    let top = core.title_top_mm;
    let summary = &report.summary;

    fill_color(ops, INK);
    font.text(ops, &summary.campaign_name, 18.0, left, top - 7.0, true);

    fill_color(ops, MUTED);
    let scope = match filter {
        MonthFilter::All => "All months".to_string(),
        MonthFilter::Month(month) => format!("Month {}", month),
    };
    font.text(ops, &format!("Advertiser: {}", summary.advertiser), 10.0, left, top - 14.0, false);
    font.text(ops, &format!("Period: {}  |  {}", summary.period, scope), 10.0, left, top - 19.5, false);

    let card_width = core.content_width_mm / 3.0 - 4.0;
    let card_bottom = core.cards_top_mm - core.card_height_mm;
    for (index, card) in metric_cards(rows, filter).iter().enumerate() {
        let x = core.card_x_mm(index);
        fill_rect(ops, x, card_bottom, card_width, core.card_height_mm, PANEL);

        fill_color(ops, MUTED);
        font.text(ops, card.label, 8.0, x + 4.0, core.cards_top_mm - 5.5, true);
        fill_color(ops, INK);
        font.text(ops, &card.value, 16.0, x + 4.0, core.cards_top_mm - 13.5, true);
        fill_color(ops, MUTED);
        font.text(ops, &card.sub_label, 7.5, x + 4.0, core.cards_top_mm - 19.0, false);
    }
}

/// 차트 공통 영역: (막대 바닥 y, 최대 높이)
fn chart_frame(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, top: f32, title: &str) -> (f32, f32) {
    fill_color(ops, INK);
    font.text(ops, title, 9.0, core.margin_mm, top - 4.0, true);

    let base = top - core.chart_height_mm + 7.0;
    let height = core.chart_height_mm - 14.0;
    hline(ops, core.margin_mm, core.margin_mm + core.content_width_mm, base, MUTED);
    (base, height)
}

fn draw_axis_labels(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, points: &[ChartPoint], base: f32) {
    let step = points.len().div_ceil(MAX_AXIS_LABELS).max(1);
    let slots = core.bar_slots(points.len());

    fill_color(ops, MUTED);
    for (point, (x, _)) in points.iter().zip(slots.iter()).step_by(step) {
        font.text(ops, &point.label, 6.0, *x, base - 4.5, false);
    }
}

fn draw_impressions_chart(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, points: &[ChartPoint]) {
    let (base, height) = chart_frame(ops, core, font, core.impressions_chart_top_mm, "Impressions");
    if points.is_empty() {
        return;
    }

    let max = points.iter().map(|p| p.impressions).max().unwrap_or(0) as f64;
    let slots = core.bar_slots(points.len());

    if let [(x, width)] = slots.as_slice() {
        let h = scaled_height(points[0].impressions as f64, max, height);
        fill_rect(ops, *x, base, *width, h, INDIGO);
    } else {
        // 면적 차트: 각 슬롯 중앙을 이은 선 아래를 채운다
        let mut outline: Vec<LinePoint> = points
            .iter()
            .zip(slots.iter())
            .map(|(p, (x, w))| point(x + w / 2.0, base + scaled_height(p.impressions as f64, max, height)))
            .collect();
        if let (Some((first_x, first_w)), Some((last_x, last_w))) = (slots.first(), slots.last()) {
            outline.push(point(last_x + last_w / 2.0, base));
            outline.push(point(first_x + first_w / 2.0, base));
        }
        fill_polygon(ops, outline, INDIGO);
    }

    draw_axis_labels(ops, core, font, points, base);
}

fn draw_ctr_chart(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, points: &[ChartPoint]) {
    let (base, height) = chart_frame(ops, core, font, core.ctr_chart_top_mm, "CTR (%)");
    if points.is_empty() {
        return;
    }

    let max = points.iter().map(|p| p.ctr).fold(0.0_f64, f64::max);
    for (p, (x, width)) in points.iter().zip(core.bar_slots(points.len())) {
        let h = scaled_height(p.ctr, max, height);
        if h > 0.0 {
            fill_rect(ops, x, base, width, h, if p.good { EMERALD } else { MUTED });
        }
    }

    draw_axis_labels(ops, core, font, points, base);
}

fn draw_table(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, rows: &[AdRow], first_page: bool) {
    let left = core.margin_mm;
    let right = left + core.content_width_mm;
    let top = core.table_top_mm(first_page);
    let header_bottom = top - core.table_header_height_mm;

    fill_rect(ops, left, header_bottom, core.content_width_mm, core.table_header_height_mm, PANEL);
    fill_color(ops, MUTED);
    let headers = if font.is_unicode() { TABLE_HEADERS } else { TABLE_HEADERS_LATIN };
    for (col, header) in headers.iter().enumerate() {
        let y = header_bottom + 2.6;
        if NUMERIC_COLUMNS[col] {
            let cell_right = core.column_x_mm(col) + TABLE_COLUMN_WIDTHS_MM[col] - 2.0;
            font.text_right(ops, header, 7.0, cell_right, y);
        } else {
            font.text(ops, header, 7.0, core.column_x_mm(col) + 2.0, y, true);
        }
    }

    if rows.is_empty() {
        fill_color(ops, MUTED);
        font.text(ops, EMPTY_TABLE_MESSAGE, 9.0, left + 2.0, header_bottom - 10.0, false);
        return;
    }

    for (slot, row) in rows.iter().enumerate() {
        let bottom = core.row_bottom_mm(first_page, slot);
        let y = bottom + 2.3;

        for (col, value) in table_cells(row).iter().enumerate() {
            let ink = if col == 5 && is_good_ctr(row.ctr) { EMERALD } else { INK };
            fill_color(ops, ink);
            if NUMERIC_COLUMNS[col] {
                let cell_right = core.column_x_mm(col) + TABLE_COLUMN_WIDTHS_MM[col] - 2.0;
                font.text_right(ops, value, 8.0, cell_right, y);
            } else {
                font.text(ops, value, 8.0, core.column_x_mm(col) + 2.0, y, col == 0);
            }
        }
        hline(ops, left, right, bottom, PANEL);
    }
}

fn draw_page_number(ops: &mut Vec<Op>, core: &PdfLayoutCore, font: &PdfFont, page: usize, total: usize) {
    fill_color(ops, MUTED);
    let right = core.margin_mm + core.content_width_mm;
    font.text_right(ops, &format!("{} / {}", page, total), 8.0, right, core.margin_mm / 2.0);
}
