//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 에러 타입과 결과 타입을 제공합니다.

pub mod errors;

pub use errors::*;
