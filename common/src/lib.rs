//! Ad Report Common Library
//!
//! 광고 성과 시트의 스키마 추론 엔진과, CLI/내보내기에서 공유하는 타입・유틸리티

pub mod cell;
pub mod normalizer;
pub mod keywords;
pub mod header;
pub mod columns;
pub mod metadata;
pub mod rows;
pub mod types;
pub mod assemble;
pub mod month;
pub mod pagination;
pub mod display;
pub mod layout;
pub mod export;
pub mod package;
pub mod prompts;
pub mod error;

pub use cell::{Cell, Grid};
pub use keywords::{KeywordConfig, KeywordSet};
pub use types::{AdRow, CampaignSummary, ReportData};
pub use rows::Totals;
pub use assemble::{parse_grid, ParseOptions, ReportDefaults};
pub use month::{available_months, month_bucket, MonthFilter};
pub use pagination::Page;
pub use layout::PdfLayout;
pub use error::{Error, Result};
