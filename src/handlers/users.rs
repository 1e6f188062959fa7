//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 응답은 [`ApiResponse`] 엔벨로프로 감싸지며, 실패는 `AppError`로
//! 전파되어 `ErrorFilter`가 엔벨로프로 변환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/usuarios/createUser` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/usuarios/getUserById/{id}` | 사용자 단건 조회 | 200 OK |
//! | `GET` | `/api/v1/usuarios/getAllUsers` | 사용자 전체 조회 | 200 OK |
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! 본문 바이트 ──▶ CreateUserRequest::from_json ──▶ DtoValidator::validate
//!                       │ 400 (MalformedJson,             │ 400 (NotBlank, Email,
//!                       │      UnknownField, InvalidType) │      Pattern, Past, ...)
//!                       ▼                                 ▼
//!                 into_domain ──▶ UserService::create_user ──▶ 201 + Location
//!                                        │ 409 (중복 이메일)
//! ```

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use log::{debug, info};
use crate::core::errors::AppError;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::dto::DtoValidator;
use crate::domain::models::context::RequestContext;
use crate::routes::USERS_SCOPE;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/usuarios/createUser`
///
/// # 요청 본문
///
/// ```json
/// {
///   "firstName": "Ana",
///   "lastName": "Gómez",
///   "email": "ana@example.com",
///   "phone": "+57 300 123 4567",
///   "address": "Calle 1 # 2-3",
///   "birthDate": "1990-05-17",
///   "baseSalary": 2500000
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// `Location: /api/v1/usuarios/getUserById/{id}` 헤더와 함께
/// 생성된 사용자를 `data`에 담아 반환합니다.
///
/// ## 실패 사례
///
/// - 본문 디코딩/검증 실패: 400, `errors[]`에 필드별 항목
/// - 중복 이메일: 409, `이미 등록된 이메일입니다`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/usuarios/createUser \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Ana","lastName":"Gómez","email":"ana@example.com",
///        "phone":"3001234567","address":"Calle 1","baseSalary":2500000}'
/// ```
#[post("/createUser")]
pub async fn create_user(
    body: web::Bytes,
    ctx: RequestContext,
    validator: web::Data<DtoValidator>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let request = CreateUserRequest::from_json(&body)?;
    validator.validate(&request)?;

    info!("[{}] 사용자 생성 요청: {}", ctx.trace_id, request.email);

    let created = user_service.create_user(request.into_domain()?).await?;
    let response = UserResponse::from(created);
    let location = format!("{}/getUserById/{}", USERS_SCOPE, response.id);

    debug!("[{}] 사용자 생성: {}", ctx.trace_id, response.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::created(response).with_context(&ctx)))
}

/// 사용자 단건 조회 핸들러
///
/// `GET /api/v1/usuarios/getUserById/{id}`
///
/// 존재하지 않는 ID는 `사용자를 찾을 수 없습니다` 메시지와 함께
/// 설정된 not-found 상태 코드(기본 409)로 응답합니다.
#[get("/getUserById/{id}")]
pub async fn get_user_by_id(
    id: web::Path<String>,
    ctx: RequestContext,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(user)).with_context(&ctx)))
}

/// 사용자 전체 조회 핸들러
///
/// `GET /api/v1/usuarios/getAllUsers`
///
/// 저장 순서대로 전체 목록을 반환합니다. 페이징은 지원하지 않습니다.
#[get("/getAllUsers")]
pub async fn get_all_users(
    ctx: RequestContext,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = user_service
        .get_all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    debug!("[{}] 사용자 {}명 조회", ctx.trace_id, users.len());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(users).with_context(&ctx)))
}
