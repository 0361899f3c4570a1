//! 셀 값 정규화
//!
//! 헤더/라벨 매칭용 토큰과 숫자 추출 규칙.

use crate::cell::Cell;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"[-+]?[0-9]*\.?[0-9]+").unwrap();
}

/// 매칭용 토큰: 공백과 [A-Za-z0-9가-힣] 이외 문자를 제거하고 대문자화
pub fn normalize_token(cell: &Cell) -> String {
    normalize_str(&cell.to_display_string())
}

pub fn normalize_str(value: &str) -> String {
    value
        .chars()
        .filter(|c| is_token_char(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// 셀에서 숫자를 추출 (추출 불가 시 0)
///
/// 문자열은 첫 `(` 앞부분만 보고, `,` 와 `%` 를 제거한 뒤
/// 첫 번째 숫자 패턴을 읽는다. `"10(5%)"` → 10, `"1,234"` → 1234.
pub fn extract_number(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) if n.is_finite() => *n,
        Cell::Number(_) | Cell::Empty => 0.0,
        Cell::Text(s) => parse_number_text(s),
    }
}

pub fn parse_number_text(value: &str) -> f64 {
    let head = value.split('(').next().unwrap_or_default();
    let cleaned: String = head.chars().filter(|c| *c != ',' && *c != '%').collect();

    NUMBER_RE
        .find(cleaned.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// 소수점 둘째 자리 반올림
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(&Cell::from(" 노출 수(Imp) ")), "노출수IMP");
        assert_eq!(normalize_token(&Cell::from("Click-Through")), "CLICKTHROUGH");
        assert_eq!(normalize_token(&Cell::from(2026)), "2026");
        assert_eq!(normalize_token(&Cell::Empty), "");
    }

    #[test]
    fn test_normalize_idempotent_and_uppercase() {
        let samples = ["노출수 (Imp)", "click-through rate", "ctr%", "광고 상품명", "Date / 일자", ""];
        for sample in samples {
            let once = normalize_str(sample);
            assert_eq!(normalize_str(&once), once, "{:?}", sample);
            assert_eq!(normalize_token(&Cell::from(once.as_str())), once);
            assert!(!once.chars().any(|c| c.is_lowercase()), "{:?}", once);
        }
    }

    #[test]
    fn test_normalize_drops_jamo_and_symbols() {
        // 완성형 한글만 유지
        assert_eq!(normalize_str("ㄱ가★b"), "가B");
    }

    #[test]
    fn test_extract_number_parenthetical() {
        assert_eq!(extract_number(&Cell::from("10(5%)")), 10.0);
    }

    #[test]
    fn test_extract_number_thousands_and_percent() {
        assert_eq!(extract_number(&Cell::from("1,234")), 1234.0);
        assert_eq!(extract_number(&Cell::from("3.5%")), 3.5);
        assert_eq!(extract_number(&Cell::from("  -12 회")), -12.0);
        assert_eq!(extract_number(&Cell::from(".5")), 0.5);
    }

    #[test]
    fn test_extract_number_unparseable() {
        assert_eq!(extract_number(&Cell::from("N/A")), 0.0);
        assert_eq!(extract_number(&Cell::from("")), 0.0);
        assert_eq!(extract_number(&Cell::Empty), 0.0);
        assert_eq!(extract_number(&Cell::Number(f64::NAN)), 0.0);
    }

    #[test]
    fn test_extract_number_passthrough() {
        assert_eq!(extract_number(&Cell::from(42.25)), 42.25);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.666), 6.67);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }
}
