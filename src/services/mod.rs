//! # Services Module
//!
//! 비즈니스 유스케이스를 구현하는 서비스 계층입니다.
//! 서비스는 생성자로 저장소 포트를 주입받으며, `web::Data`로 핸들러에 공유됩니다.

pub mod users;
