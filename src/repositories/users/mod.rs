//! 사용자 데이터 액세스 어댑터
//!
//! [`UserRepository`](crate::domain::ports::UserRepository) 포트의 구현체들입니다.
//!
//! - [`user_repo::MongoUserRepository`] - MongoDB 저장소
//! - [`memory_repo::InMemoryUserRepository`] - 개발/테스트용 인메모리 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRowMapping};
//!
//! let repo = MongoUserRepository::new(&database, "users", UserRowMapping::default());
//! repo.create_indexes().await?;
//! ```

pub mod memory_repo;
pub mod user_document;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_document::{UserDocument, UserRowMapping};
pub use user_repo::MongoUserRepository;
