//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버, 저장소, 요청 제한, 에러 매핑 관련 설정을 환경 변수에서 읽습니다.
//! 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::str::FromStr;
use actix_web::http::StatusCode;
use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 인메모리 저장소 기본값
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT")
                .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string())),
        )
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 환경 변수를 읽어 파싱합니다. 값이 없으면 기본값, 잘못된 값이면 에러 로그 후 기본값
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수
    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_service_dev".to_string())
    }

    /// 사용자 컬렉션명
    pub fn collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }

    /// 모니터링/로그에 표시되는 애플리케이션 이름
    pub fn app_name() -> String {
        "user_service".to_string()
    }
}

/// 사용자 저장소 구현
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

pub struct StorageConfig;

impl StorageConfig {
    /// `USER_STORE` 환경 변수 (`mongodb` | `memory`)
    pub fn backend() -> StorageBackend {
        Self::backend_for(env::var("USER_STORE").ok().as_deref(), &Environment::current())
    }

    pub fn backend_for(raw: Option<&str>, environment: &Environment) -> StorageBackend {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(value) if value == "memory" || value == "in-memory" => StorageBackend::Memory,
            Some(value) if value == "mongodb" || value == "mongo" => StorageBackend::MongoDb,
            Some(value) => {
                error!("알 수 없는 USER_STORE 값: {}. 환경 기본값 사용", value);
                Self::default_for(environment)
            }
            None => Self::default_for(environment),
        }
    }

    fn default_for(environment: &Environment) -> StorageBackend {
        match environment {
            Environment::Test => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 경계 필터의 상태 코드 매핑 설정
pub struct ErrorMappingConfig;

impl ErrorMappingConfig {
    /// not-found 조건의 HTTP 상태 코드 (`NOT_FOUND_STATUS`, 기본값 409)
    pub fn not_found_status() -> StatusCode {
        Self::parse_not_found_status(env::var("NOT_FOUND_STATUS").ok().as_deref())
    }

    /// 409와 404만 허용합니다.
    pub fn parse_not_found_status(raw: Option<&str>) -> StatusCode {
        match raw.map(str::trim) {
            None | Some("409") => StatusCode::CONFLICT,
            Some("404") => StatusCode::NOT_FOUND,
            Some(other) => {
                error!("NOT_FOUND_STATUS 값 {}은(는) 지원하지 않습니다. 기본값 409 사용", other);
                StatusCode::CONFLICT
            }
        }
    }
}
