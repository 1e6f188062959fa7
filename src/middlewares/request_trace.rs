//! 요청 트레이스 미들웨어
//!
//! 요청마다 트레이스 ID를 할당하여 Request Extensions에 저장하고
//! `X-Trace-Id` 응답 헤더로 돌려줍니다. 유효한 `X-Request-Id` 헤더가
//! 들어오면 그 값을 그대로 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::trace_inner::RequestTraceService;

/// 트레이스 ID 요청 헤더
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// 트레이스 ID 응답 헤더
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// 요청 트레이스 미들웨어
#[derive(Debug, Clone, Default)]
pub struct RequestTrace;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestTraceService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::models::context::{RequestContext, TraceId};

    async fn echo_trace(ctx: RequestContext) -> HttpResponse {
        HttpResponse::Ok().body(ctx.trace_id.to_string())
    }

    #[actix_web::test]
    async fn test_generates_trace_id_header() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo_trace)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .expect("trace header");
        let body = test::read_body(res).await;

        assert!(uuid::Uuid::parse_str(&header).is_ok());
        assert_eq!(body, header.as_bytes());
    }

    #[actix_web::test]
    async fn test_reuses_inbound_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo_trace)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "req-42"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.headers().get(TRACE_ID_HEADER).unwrap(), "req-42");
        assert_eq!(test::read_body(res).await, TraceId::from("req-42").as_str().as_bytes());
    }
}
