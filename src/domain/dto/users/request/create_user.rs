//! # Create User Request DTO
//!
//! 사용자 생성 API의 요청 본문과 검증 규칙입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 오류 코드 |
//! |------|------|-----------|
//! | `firstName`, `lastName`, `address` | 공백이 아닌 문자열 | `NotBlank` |
//! | `email` | 공백 불가, 이메일 형식 | `NotBlank`, `Email` |
//! | `phone` | 공백 불가, `^[+\d][\d\s-]{6,20}$` | `NotBlank`, `Pattern` |
//! | `birthDate` | 선택, 오늘(서버 시계) 이전 | `Past` |
//! | `baseSalary` | 필수, `0 < salary ≤ 15,000,000` | `NotNull`, `DecimalMin`, `DecimalMax` |
//!
//! ## 요청 예시
//!
//! ```json
//! {
//!   "firstName": "Ana",
//!   "lastName": "Gómez",
//!   "email": "ana@example.com",
//!   "phone": "+57 300 123 4567",
//!   "address": "Calle 1 # 2-3",
//!   "birthDate": "1990-04-12",
//!   "baseSalary": 2500000.50
//! }
//! ```

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::dto_validator::WireSchema;
use crate::domain::dto::json_body::{self, exact_decimal, text_or_empty};
use crate::domain::entities::users::user::{User, MAX_BASE_SALARY};
use crate::utils::string_utils::is_valid_string;

/// 전화번호 형식 (최소 7자)
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+\d][\d\s-]{6,20}$").expect("phone pattern is a valid regex")
});

/// 사용자 생성 요청
///
/// 누락되었거나 `null`인 문자열 필드는 빈 문자열로 디코딩되어
/// `NotBlank` 검증에서 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "text_or_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[serde(deserialize_with = "text_or_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,

    #[serde(deserialize_with = "text_or_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(deserialize_with = "text_or_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(regex(path = *PHONE_REGEX, message = "전화번호 형식이 올바르지 않습니다"))]
    pub phone: String,

    #[serde(deserialize_with = "text_or_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[validate(custom(function = "validate_past_date"))]
    pub birth_date: Option<NaiveDate>,

    #[serde(deserialize_with = "exact_decimal")]
    #[validate(required(message = "baseSalary는 필수입니다"))]
    #[validate(custom(function = "validate_salary_range"))]
    pub base_salary: Option<Decimal>,
}

impl WireSchema for CreateUserRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("first_name", "firstName"),
        ("last_name", "lastName"),
        ("email", "email"),
        ("phone", "phone"),
        ("address", "address"),
        ("birth_date", "birthDate"),
        ("base_salary", "baseSalary"),
    ];
}

impl CreateUserRequest {
    /// 요청 본문을 디코딩합니다. 검증은 수행하지 않습니다.
    pub fn from_json(bytes: &[u8]) -> AppResult<Self> {
        json_body::decode(bytes)
    }

    /// 요청을 도메인 엔티티로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `baseSalary`가 없는 경우 (`NotNull`)
    pub fn into_domain(self) -> AppResult<User> {
        let base_salary = self
            .base_salary
            .ok_or_else(|| AppError::field("baseSalary", "NotNull", "baseSalary는 필수입니다"))?;

        Ok(User {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            base_salary,
            birth_date: self.birth_date,
            address: self.address,
            phone: self.phone,
        })
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("NotBlank"));
    }
    Ok(())
}

fn validate_past_date(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if *date >= today {
        return Err(ValidationError::new("Past")
            .with_message("birthDate는 과거 날짜여야 합니다".into()));
    }
    Ok(())
}

fn validate_salary_range(salary: &Decimal) -> Result<(), ValidationError> {
    if *salary <= Decimal::ZERO {
        return Err(ValidationError::new("DecimalMin")
            .with_message("baseSalary는 0보다 커야 합니다".into()));
    }
    if *salary > MAX_BASE_SALARY {
        return Err(ValidationError::new("DecimalMax")
            .with_message("baseSalary는 15,000,000을 초과할 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
            address: "Calle 1 # 2-3".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            base_salary: Some(Decimal::from_str("2500000.50").unwrap()),
        }
    }

    fn codes_for(request: &CreateUserRequest, field: &str) -> Vec<String> {
        match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .get(field)
                .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
                .unwrap_or_default(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_names_fail() {
        let mut request = valid_request();
        request.first_name = "   ".to_string();
        request.address = String::new();

        assert_eq!(codes_for(&request, "first_name"), vec!["NotBlank"]);
        assert_eq!(codes_for(&request, "address"), vec!["NotBlank"]);
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();

        assert_eq!(codes_for(&request, "email"), vec!["email"]);
    }

    #[test]
    fn test_phone_pattern() {
        let mut request = valid_request();

        request.phone = "123456".to_string();
        assert_eq!(codes_for(&request, "phone"), vec!["regex"]);

        request.phone = "1234567".to_string();
        assert!(codes_for(&request, "phone").is_empty());

        request.phone = "300-123 45 67".to_string();
        assert!(codes_for(&request, "phone").is_empty());

        request.phone = "-3001234567".to_string();
        assert_eq!(codes_for(&request, "phone"), vec!["regex"]);
    }

    #[test]
    fn test_birth_date_must_be_in_the_past() {
        let mut request = valid_request();

        request.birth_date = Some(Utc::now().date_naive());
        assert_eq!(codes_for(&request, "birth_date"), vec!["Past"]);

        request.birth_date = Some(Utc::now().date_naive() + Duration::days(30));
        assert_eq!(codes_for(&request, "birth_date"), vec!["Past"]);

        request.birth_date = None;
        assert!(codes_for(&request, "birth_date").is_empty());
    }

    #[test]
    fn test_base_salary_bounds() {
        let mut request = valid_request();

        request.base_salary = Some(Decimal::ZERO);
        assert_eq!(codes_for(&request, "base_salary"), vec!["DecimalMin"]);

        request.base_salary = Some(Decimal::from(15_000_001));
        assert_eq!(codes_for(&request, "base_salary"), vec!["DecimalMax"]);

        request.base_salary = Some(Decimal::from(15_000_000));
        assert!(codes_for(&request, "base_salary").is_empty());

        request.base_salary = None;
        assert_eq!(codes_for(&request, "base_salary"), vec!["required"]);
    }

    #[test]
    fn test_from_json_maps_wire_names() {
        let body = r#"{
            "firstName": "Ana",
            "lastName": "Gómez",
            "email": "ana@example.com",
            "phone": "+57 300 123 4567",
            "address": "Calle 1 # 2-3",
            "birthDate": "1990-04-12",
            "baseSalary": 2500000.50
        }"#;

        let request = CreateUserRequest::from_json(body.as_bytes()).unwrap();

        assert_eq!(request, valid_request());
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let result = CreateUserRequest::from_json(r#"{"firstName":"Ana","salary":10}"#.as_bytes());

        match result {
            Err(AppError::ValidationError(items)) => {
                assert_eq!(items[0].field, "salary");
                assert_eq!(items[0].code, "UnknownField");
            }
            other => panic!("Expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_keeps_salary_digits() {
        let body = r#"{"baseSalary": 1234567.123456789012345}"#;

        let request = CreateUserRequest::from_json(body.as_bytes()).unwrap();

        assert_eq!(
            request.base_salary,
            Some(Decimal::from_str("1234567.123456789012345").unwrap())
        );
    }

    #[test]
    fn test_from_json_null_text_becomes_blank() {
        let body = r#"{"firstName": null, "baseSalary": null}"#;

        let request = CreateUserRequest::from_json(body.as_bytes()).unwrap();

        assert_eq!(request, CreateUserRequest::default());
        assert_eq!(codes_for(&request, "first_name"), vec!["NotBlank"]);
    }

    #[test]
    fn test_out_of_range_salary_reports_bound() {
        let request = CreateUserRequest::from_json(r#"{"baseSalary": 1e30}"#.as_bytes()).unwrap();
        assert_eq!(codes_for(&request, "base_salary"), vec!["DecimalMax"]);

        let request = CreateUserRequest::from_json(r#"{"baseSalary": -1e30}"#.as_bytes()).unwrap();
        assert_eq!(codes_for(&request, "base_salary"), vec!["DecimalMin"]);
    }

    #[test]
    fn test_into_domain_carries_every_field() {
        let request = valid_request();
        let user = request.clone().into_domain().unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.first_name, request.first_name);
        assert_eq!(user.last_name, request.last_name);
        assert_eq!(user.email, request.email);
        assert_eq!(user.phone, request.phone);
        assert_eq!(user.address, request.address);
        assert_eq!(user.birth_date, request.birth_date);
        assert_eq!(Some(user.base_salary), request.base_salary);
    }

    #[test]
    fn test_into_domain_requires_salary() {
        let mut request = valid_request();
        request.base_salary = None;

        match request.into_domain() {
            Err(AppError::ValidationError(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].field, "baseSalary");
                assert_eq!(items[0].code, "NotNull");
            }
            other => panic!("Expected NotNull, got {:?}", other),
        }
    }
}
