//! ErrorFilter 미들웨어의 실제 처리 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use log::{debug, error, warn};
use crate::core::errors::{AppError, MASKED_ERROR_MESSAGE};
use crate::domain::dto::common::ApiResponse;
use crate::domain::models::context::RequestContext;

/// 에러 응답을 엔벨로프로 변환하는 서비스
pub struct ErrorFilterService<S> {
    pub service: Rc<S>,
    pub not_found_status: StatusCode,
}

impl<S, B> Service<ServiceRequest> for ErrorFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let not_found_status = self.not_found_status;

        // HttpRequest를 복제하면 라우터의 경로 매칭이 실패하므로 컨텍스트만 보관
        let ctx = RequestContext::of(req.request());

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let rendered = res
                        .response()
                        .error()
                        .map(|err| render_error(err, &ctx, not_found_status));

                    match rendered {
                        Some(response) => {
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    let response = render_error(&err, &ctx, not_found_status);
                    Err(actix_web::error::InternalError::from_response(err.to_string(), response).into())
                }
            }
        })
    }
}

/// 에러를 컨텍스트가 채워진 엔벨로프 응답으로 렌더링합니다.
fn render_error(err: &Error, ctx: &RequestContext, not_found_status: StatusCode) -> HttpResponse {
    let Some(app_error) = err.as_error::<AppError>() else {
        error!("❌ [{}] {} 처리되지 않은 에러: {}", ctx.trace_id, ctx.path, err);
        return ApiResponse::fail(StatusCode::INTERNAL_SERVER_ERROR, MASKED_ERROR_MESSAGE)
            .with_context(ctx)
            .into_response();
    };

    let status = app_error.status_with(not_found_status);
    match app_error {
        e if e.is_server_error() => error!("❌ [{}] {} {}", ctx.trace_id, ctx.path, e),
        AppError::ValidationError(items) => {
            debug!("[{}] {} 검증 실패: {:?}", ctx.trace_id, ctx.path, items)
        }
        e => warn!("⚠️ [{}] {} {}", ctx.trace_id, ctx.path, e),
    }

    app_error.to_envelope(status).with_context(ctx).into_response()
}
