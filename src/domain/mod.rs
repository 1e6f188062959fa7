//! # Domain Layer
//!
//! 엔티티, 저장소 포트, DTO, 요청 컨텍스트 모델을 포함합니다.

pub mod entities;
pub mod dto;
pub mod models;
pub mod ports;

pub use entities::users::User;
pub use dto::{ApiResponse, DtoValidator, ErrorItem};
pub use models::{RequestContext, TraceId};
pub use ports::UserRepository;
