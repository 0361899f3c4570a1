//! 내보내기 공통 계산 (PDF 좌표・파일명)

pub mod pdf_core;
