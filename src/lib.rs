//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 사용자 등록 및 조회 REST 서비스입니다.
//! 요청 본문을 필드 단위로 디코딩/검증하고, 유스케이스 결과와 실패를
//! 하나의 응답 엔벨로프 형식으로 돌려줍니다.
//!
//! # Features
//!
//! - **사용자 관리**: 사용자 생성, ID 단건 조회, 전체 조회
//! - **필드 단위 검증**: 선언 순서대로 필드별 오류 항목 반환
//! - **응답 엔벨로프**: 성공/실패 모두 `success`, `code`, `message`, `path`, `traceId` 포함
//! - **요청 트레이스**: 요청마다 트레이스 ID 부여 및 `X-Trace-Id` 헤더
//! - **저장소 선택**: MongoDB 또는 인메모리 (`USER_STORE`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← RequestTrace, ErrorFilter
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 디코딩/검증, 응답 엔벨로프
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository 포트 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//! use user_service_backend::services::users::UserService;
//! use user_service_backend::domain::dto::DtoValidator;
//! use user_service_backend::routes::configure_all_routes;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//!
//! App::new()
//!     .app_data(web::Data::new(service))
//!     .app_data(web::Data::new(DtoValidator::new()))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
