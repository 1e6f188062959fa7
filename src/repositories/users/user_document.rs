//! 사용자 저장 형태와 매핑 함수
//!
//! 도메인 [`User`]와 MongoDB 문서 [`UserDocument`] 사이의 변환을
//! 명시적인 함수 쌍([`UserRowMapping`])으로 표현합니다.

use std::str::FromStr;
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// 저장되는 생년월일 형식
const DATE_FORMAT: &str = "%Y-%m-%d";

/// `users` 컬렉션 문서
///
/// 급여는 정밀도 보존을 위해 10진 문자열, 생년월일은 `YYYY-MM-DD` 문자열로 저장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub base_salary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 엔티티 ↔ 문서 매핑 함수
#[derive(Clone, Copy)]
pub struct UserRowMapping {
    /// (엔티티, 할당된 ID, 저장 시각) → 문서
    pub to_row: fn(&User, &str, DateTime) -> UserDocument,
    /// 문서 → 엔티티. 손상된 필드는 `DatabaseError`
    pub from_row: fn(UserDocument) -> AppResult<User>,
}

impl Default for UserRowMapping {
    fn default() -> Self {
        Self {
            to_row: user_to_document,
            from_row: document_to_user,
        }
    }
}

pub fn user_to_document(user: &User, id: &str, now: DateTime) -> UserDocument {
    UserDocument {
        id: id.to_string(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        base_salary: user.base_salary.to_string(),
        birth_date: user.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
        address: user.address.clone(),
        phone: user.phone.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn document_to_user(doc: UserDocument) -> AppResult<User> {
    let base_salary = Decimal::from_str(&doc.base_salary).map_err(|e| {
        AppError::DatabaseError(format!("사용자 {}의 base_salary 변환 실패: {}", doc.id, e))
    })?;

    let birth_date = doc
        .birth_date
        .as_deref()
        .map(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT))
        .transpose()
        .map_err(|e| {
            AppError::DatabaseError(format!("사용자 {}의 birth_date 변환 실패: {}", doc.id, e))
        })?;

    Ok(User {
        id: Some(doc.id),
        first_name: doc.first_name,
        last_name: doc.last_name,
        email: doc.email,
        base_salary,
        birth_date,
        address: doc.address,
        phone: doc.phone,
    })
}
