//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 설정된 저장소(MongoDB 또는 인메모리)를 연결하고 사용자 관리 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use user_service_backend::db::Database;
use user_service_backend::domain::dto::DtoValidator;
use user_service_backend::domain::ports::UserRepository;
use user_service_backend::middlewares::{ErrorFilter, RequestTrace, REQUEST_ID_HEADER, TRACE_ID_HEADER};
use user_service_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRowMapping,
};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중... (환경: {:?})", Environment::current());

    // 저장소 및 서비스 초기화
    let user_repo = initialize_repository().await?;
    let user_service = web::Data::new(UserService::new(user_repo));
    let validator = web::Data::new(DtoValidator::new());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service, validator).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 트레이스, 에러 필터, Rate Limiting, CORS, 로깅, 경로 정규화
/// 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    validator: web::Data<DtoValidator>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/usuarios", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let error_filter = ErrorFilter::from_env();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())
            .app_data(validator.clone())

            // 에러 엔벨로프 변환 (트레이스 ID를 읽으므로 RequestTrace 안쪽)
            .wrap(error_filter)
            .wrap(RequestTrace)

            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 사용자 서비스만 debug
/// RUST_LOG=info,user_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 저장소를 초기화합니다
///
/// `USER_STORE`에 따라 MongoDB 리포지토리(인덱스 생성 포함) 또는
/// 인메모리 리포지토리를 생성합니다.
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패 시
async fn initialize_repository() -> io::Result<Arc<dyn UserRepository>> {
    let backend = StorageConfig::backend();
    info!("💾 저장소 백엔드: {:?}", backend);

    match backend {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

            let repository = MongoUserRepository::new(
                &database,
                &DatabaseConfig::collection(),
                UserRowMapping::default(),
            );
            repository
                .create_indexes()
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            info!("🧠 인메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers(vec![
            header::LOCATION,
            header::HeaderName::from_static(TRACE_ID_HEADER),
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
