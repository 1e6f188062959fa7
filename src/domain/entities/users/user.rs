//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장소 기술과 무관한 도메인 표현이며, 저장 형태로의 변환은
//! 리포지토리 어댑터의 매핑 함수가 담당합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 기본 급여 상한 (포함)
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(15_000_000, 0, 0, false, 0);

/// 사용자 엔티티
///
/// `id`는 저장 시 서버가 할당하며, 생성 요청 단계에서는 `None`입니다.
/// 이메일은 생성 시점에만 중복 검사됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 기본 급여 (0 < salary ≤ 15,000,000)
    pub base_salary: Decimal,
    /// 생년월일 (과거 날짜)
    pub birth_date: Option<NaiveDate>,
    pub address: String,
    pub phone: String,
}

impl User {
    /// 할당된 ID를 가진 사본을 반환합니다.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }
}
