use ad_report_common::MonthFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ad-report")]
#[command(about = "광고 성과 리포트 생성 도구 (시트 분석・PDF・뷰어 패키지)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 시트를 분석해 요약과 표를 출력
    Analyze {
        /// 입력 파일 (xlsx/xls/ods/csv/tsv)
        #[arg(required = true)]
        input: PathBuf,

        /// ReportData JSON 저장 경로
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 보고서 제목 변경
        #[arg(short, long)]
        title: Option<String>,

        /// 광고주 지정
        #[arg(short, long)]
        advertiser: Option<String>,

        /// 월 필터 (all / 02 ...)
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// 표 페이지 (1부터)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 페이지당 행 수 (10/20/50/100, 생략 시 설정값)
        #[arg(long, value_parser = parse_rows_per_page)]
        rows_per_page: Option<usize>,
    },

    /// 현재 화면을 PDF로 저장
    Pdf {
        /// 입력 파일 (시트 또는 ReportData JSON)
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 파일/디렉터리 (기본: Ad_Report_<광고주>_<날짜>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 월 필터
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// 보고서 제목 변경
        #[arg(short, long)]
        title: Option<String>,

        /// 광고주 지정
        #[arg(short, long)]
        advertiser: Option<String>,

        /// 한글 폰트 (TTF/OTF, 설정값보다 우선)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// 뷰어용 데이터 패키지 생성
    Package {
        /// 입력 파일 (시트 또는 ReportData JSON)
        #[arg(required = true)]
        input: PathBuf,

        /// 클라이언트 키 (생략 시 광고주명에서 생성)
        #[arg(short, long)]
        client: Option<String>,

        /// 출력 zip 파일/디렉터리 (기본: Report_Package_<key>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// zip 대신 디렉터리에 풀어서 저장
        #[arg(long, conflicts_with = "output")]
        dir: Option<PathBuf>,

        /// AI 인사이트 생성 (Gemini)
        #[arg(long)]
        insight: bool,

        /// 인사이트 문구 직접 지정
        #[arg(long, conflicts_with = "insight")]
        insight_text: Option<String>,

        /// 배너 이미지 (여러 개 지정 가능)
        #[arg(long = "banner")]
        banners: Vec<PathBuf>,

        /// 보고서 제목 변경
        #[arg(short, long)]
        title: Option<String>,

        /// 광고주 지정
        #[arg(short, long)]
        advertiser: Option<String>,
    },

    /// 패키지 데이터를 읽기 전용으로 보기
    View {
        /// 패키지를 푼 디렉터리 (data/ 를 포함)
        #[arg(default_value = ".")]
        root: PathBuf,

        /// 클라이언트 키
        #[arg(short, long, default_value = crate::viewer::DEFAULT_CLIENT)]
        client: String,

        /// 월 필터
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// 표 페이지
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 페이지당 행 수
        #[arg(long, value_parser = parse_rows_per_page)]
        rows_per_page: Option<usize>,
    },

    /// AI 인사이트 출력
    Insight {
        /// 입력 파일 (시트 또는 ReportData JSON)
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 설정 표시/편집
    Config {
        /// API 키 설정
        #[arg(long)]
        set_api_key: Option<String>,

        /// 한글 폰트 경로 설정
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// 기본 광고주 설정
        #[arg(long)]
        set_advertiser: Option<String>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}

/// 선택 가능한 값만 허용
pub fn parse_rows_per_page(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if ad_report_common::pagination::ROWS_PER_PAGE_OPTIONS.contains(&value) {
        Ok(value)
    } else {
        Err(format!("Unsupported rows per page: {}. Use 10, 20, 50, or 100", value))
    }
}
