//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증과 메시지 유틸리티

pub mod string_utils;
