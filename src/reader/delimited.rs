//! CSV / TSV 읽기

use crate::error::{ReportError, Result};
use ad_report_common::{Cell, Grid};
use csv::ReaderBuilder;

/// 구분자 텍스트를 Grid로 (BOM 제거, 빈 행 제거)
///
/// 따옴표 안의 줄바꿈(`"노출수\n(Imp)"` 같은 헤더)은 한 필드로 유지된다.
pub fn parse_delimited(content: &str, delimiter: char) -> Result<Grid> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| ReportError::UnsupportedFormat(format!("구분자 {:?}", delimiter)))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(field_to_cell).collect());
    }
    Ok(Grid::without_blank_rows(rows))
}

/// 숫자로 완전히 해석되는 필드는 Number
fn field_to_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}
