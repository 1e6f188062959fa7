//! 라우트 설정
//!
//! 모든 HTTP 엔드포인트를 애플리케이션에 등록합니다.
//! 핸들러가 사용하는 `web::Data<UserService>`, `web::Data<DtoValidator>`는
//! 호출 측에서 `App::app_data`로 등록해야 합니다.

use crate::domain::dto::common::ApiResponse;
use crate::domain::models::context::RequestContext;
use crate::handlers;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 사용자 API 스코프
pub const USERS_SCOPE: &str = "/api/v1/usuarios";

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);

    // 일치하는 라우트가 없으면 엔벨로프 형태의 404
    cfg.default_service(web::to(route_not_found));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(USERS_SCOPE)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user_by_id)
            .service(handlers::users::get_all_users)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB / In-Memory",
            "dependency_injection": "web::Data"
        }
    }))
}

async fn route_not_found(ctx: RequestContext) -> HttpResponse {
    ApiResponse::fail(StatusCode::NOT_FOUND, "Not Found")
        .with_context(&ctx)
        .into_response()
}
