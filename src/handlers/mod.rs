//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - 트레이스 ID, 에러 엔벨로프          ← Filter Layer
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스와 검증기는 `main`에서 한 번 생성되어 `web::Data`로 공유됩니다.
//!
//! ```rust,ignore
//! #[get("/getAllUsers")]
//! pub async fn get_all_users(
//!     ctx: RequestContext,
//!     user_service: web::Data<UserService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let users = user_service.get_all_users().await?;
//!     // ...
//! }
//! ```
//!
//! ## 에러 처리
//! - **Result 패턴**: 핸들러는 `Result<HttpResponse, AppError>`를 반환
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **엔벨로프 렌더링**: `ErrorFilter`가 경로와 트레이스 ID를 채워 응답
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 사용자 생성 (`POST /api/v1/usuarios/createUser`)
//!   - 사용자 조회 (`GET /api/v1/usuarios/getUserById/{id}`)
//!   - 전체 조회 (`GET /api/v1/usuarios/getAllUsers`)

pub mod users;
