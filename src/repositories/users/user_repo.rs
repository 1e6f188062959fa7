//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 어댑터입니다.
//!
//! ## 특징
//!
//! - **명시적 매핑**: [`UserRowMapping`] 함수 쌍으로 엔티티와 문서를 변환
//! - **서버 할당 ID**: 저장 시 UUID v4 문자열을 `_id`로 사용
//! - **데이터 무결성**: 이메일 유니크 인덱스

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::domain::ports::UserRepository;
use crate::repositories::users::user_document::{UserDocument, UserRowMapping};

/// MongoDB 사용자 리포지토리
///
/// ## 컬렉션
/// - **컬렉션명**: `USERS_COLLECTION` (기본값 `users`)
/// - **인덱스**: email(unique), created_at(desc)
///
/// ## 동시성
///
/// 이메일 중복 검사와 저장은 별도의 두 호출입니다. 동시에 같은 이메일로
/// 생성 요청이 들어오면 유니크 인덱스가 두 번째 삽입을 거부하며,
/// 이 경우 `DatabaseError`(500)로 보고됩니다.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
    mapping: UserRowMapping,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str, mapping: UserRowMapping) -> Self {
        Self {
            collection: db.get_database().collection::<UserDocument>(collection_name),
            mapping,
        }
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 무시됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ 사용자 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let id = Uuid::new_v4().to_string();
        let document = (self.mapping.to_row)(&user, &id, DateTime::now());

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 저장 완료: {}", id);
        Ok(user.with_id(id))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let document = self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        document.map(self.mapping.from_row).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(self.mapping.from_row).collect()
    }
}
