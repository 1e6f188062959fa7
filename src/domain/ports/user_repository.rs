use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 저장소 계약
///
/// 유스케이스는 이 트레이트에만 의존하며, 저장 기술은
/// MongoDB 어댑터 또는 인메모리 어댑터로 교체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 해당 이메일의 사용자가 존재하는지 확인
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 사용자를 저장하고 서버가 할당한 ID를 채워 반환
    async fn save(&self, user: User) -> AppResult<User>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 전체 사용자 조회 (저장 순서)
    async fn find_all(&self) -> AppResult<Vec<User>>;
}
