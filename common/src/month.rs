//! 월 버킷
//!
//! 날짜 문자열에서 두 자리 월을 뽑아 화면 필터와 패키지 분할에 쓴다.

use crate::types::AdRow;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref YEAR_MONTH_RE: Regex = Regex::new(r"\d{4}[.\-](\d{2})").unwrap();
    static ref MONTH_DOT_RE: Regex = Regex::new(r"(\d{2})\.").unwrap();
}

/// 날짜 문자열의 월 (`"2026.02.06"` → `"02"`, `"26.02."` → `"02"`)
///
/// 4자리 연도 뒤의 두 자리를 우선하고, 없으면 `.` 앞의 두 자리 중 마지막 것.
pub fn month_bucket(date: &str) -> Option<String> {
    if let Some(caps) = YEAR_MONTH_RE.captures(date) {
        return Some(caps[1].to_string());
    }
    MONTH_DOT_RE
        .captures_iter(date)
        .last()
        .map(|caps| caps[1].to_string())
}

/// 행 집합에 존재하는 월 (숫자 오름차순, 중복 없음)
pub fn available_months(rows: &[AdRow]) -> Vec<String> {
    let mut months: Vec<String> = rows.iter().filter_map(|row| month_bucket(&row.date)).collect();
    months.sort_by_key(|m| m.parse::<u32>().unwrap_or(u32::MAX));
    months.dedup();
    months
}

/// `"02"` → `"2월"`
pub fn month_label(month: &str) -> String {
    match month.parse::<u32>() {
        Ok(n) => format!("{}월", n),
        Err(_) => month.to_string(),
    }
}

/// 화면/내보내기 대상 기간
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(String),
}

impl MonthFilter {
    /// 필터에 해당하는 행 (All은 월을 알 수 없는 행도 포함)
    pub fn rows_for<'a>(&self, rows: &'a [AdRow]) -> Vec<&'a AdRow> {
        match self {
            MonthFilter::All => rows.iter().collect(),
            MonthFilter::Month(month) => rows
                .iter()
                .filter(|row| month_bucket(&row.date).as_deref() == Some(month.as_str()))
                .collect(),
        }
    }

    /// 행을 소유한 복사본으로
    pub fn filter_rows(&self, rows: &[AdRow]) -> Vec<AdRow> {
        self.rows_for(rows).into_iter().cloned().collect()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().trim_end_matches('월');
        match value.to_lowercase().as_str() {
            "" | "all" | "전체" => Ok(MonthFilter::All),
            digits if (1..=2).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) => {
                Ok(MonthFilter::Month(format!("{:0>2}", digits)))
            }
            _ => Err(format!("Unknown month: {}. Use all or a month number (e.g. 02)", s)),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Month(month) => write!(f, "{}", month),
        }
    }
}
