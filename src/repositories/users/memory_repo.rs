//! 인메모리 사용자 리포지토리
//!
//! 개발 환경과 테스트에서 사용하는 저장소입니다. 삽입 순서를 유지합니다.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::domain::ports::UserRepository;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let stored = user.with_id(Uuid::new_v4().to_string());
        self.users.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id.as_deref() == Some(id)).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn user(email: &str) -> User {
        User {
            id: None,
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: email.to_string(),
            base_salary: Decimal::from(1000),
            birth_date: None,
            address: "Calle 1".to_string(),
            phone: "3001234567".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_finds_by_id() {
        let repo = InMemoryUserRepository::new();

        let saved = repo.save(user("a@example.com")).await.unwrap();
        let id = saved.id.clone().unwrap();

        assert!(!id.is_empty());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_exists_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("a@example.com")).await.unwrap();

        assert!(repo.exists_by_email("a@example.com").await.unwrap());
        assert!(!repo.exists_by_email("b@example.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        let first = repo.save(user("a@example.com")).await.unwrap();
        let second = repo.save(user("b@example.com")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }
}
