//! 공통 응답 엔벨로프
//!
//! 모든 HTTP 응답 본문은 [`ApiResponse`]로 감싸집니다.
//!
//! ```json
//! {
//!   "success": true,
//!   "code": 201,
//!   "message": "CREATED",
//!   "data": { "id": "...", "firstName": "..." },
//!   "timestamp": "2024-05-01T10:00:00Z",
//!   "path": "/api/v1/usuarios/createUser",
//!   "traceId": "5f0c..."
//! }
//! ```
//!
//! 성공 응답에는 `data`만, 검증 실패에는 `errors`만 채워지며
//! 그 외 실패 응답에는 둘 다 없습니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::common::ErrorItem;
use crate::domain::models::context::RequestContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = ()> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorItem>>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl<T> ApiResponse<T> {
    fn build(status: StatusCode, message: impl Into<String>, data: Option<T>, errors: Option<Vec<ErrorItem>>) -> Self {
        Self {
            success: status.is_success(),
            code: status.as_u16(),
            message: message.into(),
            data,
            errors,
            timestamp: Utc::now(),
            path: None,
            trace_id: None,
        }
    }

    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self::build(StatusCode::OK, "OK", Some(data), None)
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self::build(StatusCode::CREATED, "CREATED", Some(data), None)
    }

    /// 요청 경로와 트레이스 ID를 기록합니다.
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.path = Some(ctx.path.clone());
        self.trace_id = Some(ctx.trace_id.to_string());
        self
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse {
    /// 데이터 없는 실패 응답
    pub fn fail(status: StatusCode, message: impl Into<String>) -> Self {
        Self::build(status, message, None, None)
    }

    /// 400 검증 실패 응답
    pub fn validation(errors: Vec<ErrorItem>) -> Self {
        Self::build(StatusCode::BAD_REQUEST, "Validation error", None, Some(errors))
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// 엔벨로프의 `code`를 상태 코드로 사용하는 HTTP 응답
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::context::TraceId;

    #[test]
    fn test_ok_envelope_has_data_only() {
        let envelope = ApiResponse::ok(vec![1, 2, 3]);

        assert!(envelope.success);
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.message, "OK");
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
        assert!(envelope.errors.is_none());
    }

    #[test]
    fn test_created_envelope() {
        let envelope = ApiResponse::created("user");

        assert!(envelope.success);
        assert_eq!(envelope.code, 201);
        assert_eq!(envelope.message, "CREATED");
    }

    #[test]
    fn test_fail_envelope_has_neither_data_nor_errors() {
        let envelope = ApiResponse::fail(StatusCode::CONFLICT, "이미 등록된 이메일입니다");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 409);
        assert!(json.get("data").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_context_is_serialized_in_camel_case() {
        let ctx = RequestContext {
            path: "/api/v1/usuarios/getAllUsers".to_string(),
            trace_id: TraceId::from("trace-123"),
        };
        let envelope = ApiResponse::ok(Vec::<String>::new()).with_context(&ctx);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["path"], "/api/v1/usuarios/getAllUsers");
        assert_eq!(json["traceId"], "trace-123");
        assert!(json["timestamp"].is_string());
    }
}
