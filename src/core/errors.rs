//! # Application Error Handling System
//!
//! 사용자 관리 서비스의 통합 에러 처리 시스템입니다.
//! 검증 단계, 유스케이스 단계, 저장소 단계에서 발생하는 모든 실패를
//! 하나의 [`AppError`] 열거형으로 모으고, 경계 필터에서 일관된
//! 응답 엔벨로프([`ApiResponse`])로 변환합니다.
//!
//! ## 에러 분류와 HTTP 매핑
//!
//! | 변형 | 발생 계층 | 상태 코드 | 응답 메시지 |
//! |------|-----------|-----------|-------------|
//! | `ValidationError` | DTO 디코딩/검증 | 400 | `Validation error` + `errors[]` |
//! | `ConflictError` | 유스케이스 | 409 | 원본 메시지 그대로 |
//! | `NotFound` | 유스케이스 | 409 (기본값, `NOT_FOUND_STATUS`로 404 선택 가능) | 원본 메시지 그대로 |
//! | `DatabaseError` | 저장소 | 500 | `Unexpected error` (마스킹) |
//! | `InternalError` | 기타 | 500 | `Unexpected error` (마스킹) |
//!
//! 5xx 계열 메시지는 외부로 노출되지 않으며, 원본 내용은 경계 필터가
//! 트레이스 ID와 함께 로그로만 남깁니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::config::ErrorMappingConfig;
use crate::domain::dto::common::{ApiResponse, ErrorItem};

/// 5xx 응답에 사용되는 고정 메시지
pub const MASKED_ERROR_MESSAGE: &str = "Unexpected error";

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를
/// 구현하여 핸들러에서 `?`로 바로 전파할 수 있습니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 연결 실패, 쿼리 실패, 저장된 문서의 변환 실패 등.
    /// 응답 메시지는 마스킹됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필드 단위 오류 목록을 선언 순서대로 담습니다.
    /// 본문 디코딩 실패(`MalformedJson`, `UnknownField`, `InvalidType`)도
    /// 단일 항목 목록으로 이 변형을 사용합니다.
    #[error("Validation error: {} field error(s)", .0.len())]
    ValidationError(Vec<ErrorItem>),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 기존 클라이언트 호환을 위해 기본 상태 코드는 409입니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// # 발생 시나리오
    /// - 이미 등록된 이메일로 사용자 생성 시도
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 오류로 `ValidationError`를 생성합니다.
    pub fn field(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![ErrorItem::new(field, code, message)])
    }

    /// 주어진 not-found 상태 코드로 HTTP 상태를 결정합니다.
    pub fn status_with(&self, not_found_status: StatusCode) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => not_found_status,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 서버 측 실패 여부 (메시지 마스킹 대상)
    pub fn is_server_error(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }

    /// 요청 컨텍스트 없이 응답 엔벨로프를 생성합니다.
    ///
    /// 경로와 트레이스 ID는 경계 필터가 채웁니다.
    pub fn to_envelope(&self, status: StatusCode) -> ApiResponse {
        match self {
            AppError::ValidationError(items) => ApiResponse::validation(items.clone()),
            AppError::ConflictError(msg) | AppError::NotFound(msg) => {
                ApiResponse::fail(status, msg.clone())
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                ApiResponse::fail(status, MASKED_ERROR_MESSAGE)
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status_with(ErrorMappingConfig::not_found_status())
    }

    /// 엔벨로프 형태의 에러 응답을 생성합니다.
    ///
    /// `ErrorFilter`가 설치된 경우 이 응답은 경로/트레이스 ID가 채워진
    /// 엔벨로프로 다시 렌더링됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        actix_web::HttpResponse::build(status).json(self.to_envelope(status))
    }
}

pub type AppResult<T> = Result<T, AppError>;
