//! 셀/그리드 모델
//!
//! 시트는 "행의 배열"이며, 각 셀은 문자열・숫자・빈 값 중 하나다.
//! 행마다 길이가 달라도 되고, 범위 밖 접근은 빈 셀로 취급한다.

use std::fmt;

/// 시트의 셀 값
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    Text(String),
    Number(f64),
    #[default]
    Empty,
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// 빈 셀 여부 (빈 문자열 포함, 숫자는 0이어도 비어 있지 않음)
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// 표시용 문자열
    pub fn to_display_string(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Empty => String::new(),
        }
    }
}

/// 숫자 셀을 문자열로 (정수값은 소수점 없이)
fn format_number(n: f64) -> String {
    if n == 0.0 {
        // -0 도 "0"
        return "0".to_string();
    }
    n.to_string()
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(f64::from(value))
    }
}

/// 시트 전체 (행 우선)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// 모든 셀이 빈 행을 제거하고 생성
    pub fn without_blank_rows(rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// 행 (범위 밖이면 빈 슬라이스)
    pub fn row(&self, index: usize) -> &[Cell] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 셀 (범위 밖이면 빈 셀)
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.row(row).get(col).unwrap_or(&EMPTY_CELL)
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Grid::new(rows)
    }
}
