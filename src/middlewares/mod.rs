//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 요청 트레이스 (RequestTrace)
//! - 요청마다 트레이스 ID 할당 (`X-Request-Id` 재사용 가능)
//! - 트레이스 ID를 request extension에 저장
//! - `X-Trace-Id` 응답 헤더 추가
//!
//! ### 2. 에러 필터 (ErrorFilter)
//! - `AppError`를 상태 코드와 응답 엔벨로프로 변환
//! - 분류되지 않은 에러는 `500 Unexpected error`로 마스킹
//! - 응답에 `path`, `traceId` 기록
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::{ErrorFilter, RequestTrace};
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(ErrorFilter::from_env()) // 안쪽: 트레이스 ID를 읽음
//!         .wrap(RequestTrace)            // 바깥쪽: 트레이스 ID를 부여
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod request_trace;
mod trace_inner;
pub mod error_filter;
mod error_filter_inner;

// 미들웨어 재export
pub use request_trace::{RequestTrace, REQUEST_ID_HEADER, TRACE_ID_HEADER};
pub use error_filter::ErrorFilter;
