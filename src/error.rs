use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 키가 설정되지 않았습니다. `ad-report config --set-api-key YOUR_KEY` 또는 GEMINI_API_KEY 환경 변수로 설정해주세요")]
    MissingApiKey,

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식입니다: {0} (xlsx, xls, xlsm, xlsb, ods, csv, tsv, txt, json)")]
    UnsupportedFormat(String),

    #[error("데이터 분석 중 오류가 발생했습니다: {0}")]
    Parse(#[from] ad_report_common::Error),

    #[error("엑셀 파일을 읽을 수 없습니다: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV 파일을 읽을 수 없습니다: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF 생성 오류: {0}")]
    PdfGeneration(String),

    #[error("패키지 생성 오류: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("AI 인사이트 호출 오류: {0}")]
    Insight(String),

    #[error("뷰어 데이터를 불러올 수 없습니다: {0}")]
    ViewerData(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
