//! # Data Transfer Objects
//!
//! 와이어 형식(JSON)과 도메인 엔티티 사이의 변환을 담당합니다.
//!
//! - [`common`] - 응답 엔벨로프와 필드 오류 항목
//! - [`json_body`] - serde 기반 JSON 본문 디코딩과 오류 분류
//! - [`dto_validator`] - `validator` 결과를 오류 항목 목록으로 변환
//! - [`users`] - 사용자 요청/응답 DTO

pub mod common;
pub mod dto_validator;
pub mod json_body;
pub mod users;

pub use common::*;
pub use dto_validator::DtoValidator;
pub use users::*;
