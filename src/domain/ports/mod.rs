//! 도메인이 외부 어댑터에 요구하는 계약

pub mod user_repository;

pub use user_repository::UserRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
