//! # 사용자 관리 서비스 구현
//!
//! 사용자 생성, 단건 조회, 전체 조회 유스케이스를 구현합니다.
//! 저장소는 [`UserRepository`] 포트로 주입받습니다.
//!
//! ## 유스케이스 규칙
//!
//! | 연산 | 규칙 | 실패 |
//! |------|------|------|
//! | `create_user` | 이메일 중복 불가 | `ConflictError` (저장 호출 없음) |
//! | `get_user_by_id` | 대상이 존재해야 함 | `NotFound` |
//! | `get_all_users` | 저장 순서 그대로, 페이징 없음 | - |
//!
//! ## 동시성
//!
//! `create_user`의 중복 검사와 저장은 원자적이지 않습니다.
//! 같은 이메일의 동시 요청은 둘 다 검사를 통과할 수 있으며,
//! MongoDB 저장소에서는 유니크 인덱스가 두 번째 삽입을 거부합니다.

use std::sync::Arc;
use log::{debug, info};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::ports::UserRepository;

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn create_user(&self, user: User) -> AppResult<User> {
        if self.user_repo.exists_by_email(&user.email).await? {
            return Err(AppError::ConflictError("이미 등록된 이메일입니다".to_string()));
        }

        let created = self.user_repo.save(user).await?;
        info!("👤 사용자 생성 완료: {}", created.id.as_deref().unwrap_or_default());

        Ok(created)
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        debug!("사용자 조회: {}", id);

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }
}
