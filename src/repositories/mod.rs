//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인 포트를 구현하는 저장소 어댑터들을 제공합니다.
//! MongoDB를 주 저장소로 사용하며, 개발/테스트용 인메모리 구현을 함께 제공합니다.

pub mod users;
