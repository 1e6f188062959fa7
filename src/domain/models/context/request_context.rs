use std::fmt;
use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 요청 단위 트레이스 식별자
///
/// `RequestTrace` 미들웨어가 요청 Extensions에 저장하고
/// `X-Trace-Id` 응답 헤더로 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// 새 UUID v4 트레이스 ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 외부에서 전달된 요청 ID를 검증하여 트레이스 ID로 사용합니다.
    ///
    /// 1~128자의 출력 가능한 ASCII 문자만 허용합니다.
    pub fn from_inbound(value: &str) -> Option<Self> {
        let value = value.trim();
        let valid = !value.is_empty()
            && value.len() <= 128
            && value.chars().all(|c| c.is_ascii_graphic());

        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 현재 요청의 트레이스 ID. 미들웨어가 없으면 새로 생성합니다.
    pub fn of(req: &HttpRequest) -> Self {
        req.extensions()
            .get::<TraceId>()
            .cloned()
            .unwrap_or_else(TraceId::generate)
    }
}

impl From<&str> for TraceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 응답 엔벨로프에 기록되는 요청 정보
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// 요청 경로 (쿼리 스트링 제외)
    pub path: String,
    pub trace_id: TraceId,
}

impl RequestContext {
    pub fn of(req: &HttpRequest) -> Self {
        Self {
            path: req.path().to_string(),
            trace_id: TraceId::of(req),
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(RequestContext::of(req)))
    }
}
