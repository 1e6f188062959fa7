//! 에러 필터 미들웨어
//!
//! 핸들러와 추출기에서 발생한 모든 에러를 응답 엔벨로프로 변환합니다.
//!
//! - [`AppError`](crate::core::errors::AppError)는 분류에 맞는 상태 코드와
//!   엔벨로프로 다시 렌더링되며 `path`, `traceId`가 채워집니다.
//! - 그 외 에러는 로그로 남기고 `500 Unexpected error`로 마스킹합니다.
//! - 에러가 없는 응답은 그대로 통과합니다.
//!
//! [`RequestTrace`](crate::middlewares::RequestTrace)보다 안쪽에 등록해야
//! 트레이스 ID를 읽을 수 있습니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(ErrorFilter::from_env())
//!     .wrap(RequestTrace)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, Result,
};
use crate::config::ErrorMappingConfig;
use crate::middlewares::error_filter_inner::ErrorFilterService;

/// 에러 필터 미들웨어
#[derive(Debug, Clone, Copy)]
pub struct ErrorFilter {
    not_found_status: StatusCode,
}

impl ErrorFilter {
    /// not-found 에러에 사용할 상태 코드를 지정합니다.
    pub fn new(not_found_status: StatusCode) -> Self {
        Self { not_found_status }
    }

    /// `NOT_FOUND_STATUS` 환경 변수를 따릅니다.
    pub fn from_env() -> Self {
        Self::new(ErrorMappingConfig::not_found_status())
    }
}

impl Default for ErrorFilter {
    fn default() -> Self {
        Self::new(StatusCode::CONFLICT)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for ErrorFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorFilterService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorFilterService {
            service: Rc::new(service),
            not_found_status: self.not_found_status,
        }))
    }
}
