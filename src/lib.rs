//! ad-report
//!
//! 광고 성과 시트를 읽어 요약・PDF・뷰어 데이터 패키지를 만드는 CLI 본체

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod insight;
pub mod reader;
pub mod render;
pub mod viewer;
