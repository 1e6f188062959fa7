//! RequestTrace 미들웨어의 실제 처리 로직
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::context::TraceId;
use crate::middlewares::request_trace::{REQUEST_ID_HEADER, TRACE_ID_HEADER};

/// 트레이스 ID를 부여하는 서비스
pub struct RequestTraceService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let trace_id = req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(TraceId::from_inbound)
            .unwrap_or_else(TraceId::generate);

        // 핸들러와 에러 필터가 읽을 수 있도록 Extensions에 저장
        req.extensions_mut().insert(trace_id.clone());

        Box::pin(async move {
            let mut res = service.call(req).await?;

            match HeaderValue::from_str(trace_id.as_str()) {
                Ok(value) => {
                    res.headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(e) => log::error!("트레이스 헤더 생성 실패 ({}): {}", trace_id, e),
            }

            Ok(res)
        })
    }
}
