//! Excel / ODS 읽기 (첫 시트만)

use crate::error::{ReportError, Result};
use ad_report_common::{Cell, Grid};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{Days, NaiveDate};
use std::io::Cursor;
use tracing::debug;

pub fn read_first_sheet(bytes: &[u8]) -> Result<Grid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let sheet_names = workbook.sheet_names();
    debug!(sheets = ?sheet_names, "워크북 열기");

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReportError::Parse(ad_report_common::Error::EmptyGrid))??;

    let rows = range.rows().map(|row| row.iter().map(data_to_cell).collect()).collect();
    Ok(Grid::without_blank_rows(rows))
}

/// calamine 셀 → Cell
///
/// 날짜 셀은 `YYYY.MM.DD` 문자열로 바꿔 원본 시트의 표기와 맞춘다.
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) if f.is_finite() => Cell::Number(*f),
        Data::Float(_) => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => match excel_serial_to_date(dt.as_f64()) {
            Some(date) => Cell::Text(date),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        _ => Cell::Empty,
    }
}

/// Excel 시리얼 값 → `YYYY.MM.DD` (기준일 1899-12-30)
pub fn excel_serial_to_date(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_days(Days::new(serial.floor() as u64))?;
    Some(date.format("%Y.%m.%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_serial_to_date() {
        // 46059 = 2026-02-06
        assert_eq!(excel_serial_to_date(46059.0).as_deref(), Some("2026.02.06"));
        assert_eq!(excel_serial_to_date(46059.75).as_deref(), Some("2026.02.06"));
        assert_eq!(excel_serial_to_date(0.5), None);
    }

    #[test]
    fn test_data_to_cell() {
        assert_eq!(data_to_cell(&Data::Int(12)), Cell::Number(12.0));
        assert_eq!(data_to_cell(&Data::Float(0.5)), Cell::Number(0.5));
        assert_eq!(data_to_cell(&Data::String("노출".into())), Cell::from("노출"));
        assert_eq!(data_to_cell(&Data::String(String::new())), Cell::Empty);
        assert_eq!(data_to_cell(&Data::Bool(true)), Cell::from("TRUE"));
        assert_eq!(data_to_cell(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn test_invalid_bytes_is_workbook_error() {
        let result = read_first_sheet(b"not a workbook");
        assert!(matches!(result, Err(ReportError::Workbook(_))));
    }
}
