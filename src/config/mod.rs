//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 요청 제한, 에러 매핑 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 설정
//! export USER_STORE="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//! export USERS_COLLECTION="users"
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # not-found 응답 상태 코드 (409 | 404)
//! export NOT_FOUND_STATUS="409"
//! ```

pub mod data_config;

pub use data_config::*;
