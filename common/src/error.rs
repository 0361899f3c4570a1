//! 에러 타입 정의

use thiserror::Error;

/// 파싱 엔진 공통 에러
#[derive(Error, Debug)]
pub enum Error {
    #[error("시트가 비어 있습니다")]
    EmptyGrid,

    #[error("헤더 행을 찾을 수 없습니다 (상위 {scanned}행 검사). 노출/클릭 열이 있는지 확인해주세요")]
    HeaderNotFound { scanned: usize },

    #[error("필수 열을 찾을 수 없습니다: {0}")]
    MissingColumn(&'static str),

    #[error("유효한 데이터 행이 없습니다 (노출수가 0보다 큰 행이 필요합니다)")]
    NoUsableData,

    #[error("클라이언트 키가 올바르지 않습니다: {0:?}")]
    InvalidClientKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
