use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 조회/생성 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub base_salary: Decimal,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            base_salary,
            birth_date,
            address,
            phone,
        } = user;

        Self {
            id: id.unwrap_or_default(),
            first_name,
            last_name,
            email,
            phone,
            address,
            birth_date,
            base_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use validator::Validate;
    use crate::domain::dto::users::request::CreateUserRequest;

    #[test]
    fn test_request_to_response_preserves_shared_fields() {
        let request = CreateUserRequest {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
            address: "Calle 1 # 2-3".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            base_salary: Some(Decimal::from_str("2500000.50").unwrap()),
        };
        assert!(request.validate().is_ok());

        let response = UserResponse::from(request.clone().into_domain().unwrap().with_id("u-1"));

        assert_eq!(response.id, "u-1");
        assert_eq!(response.first_name, request.first_name);
        assert_eq!(response.last_name, request.last_name);
        assert_eq!(response.email, request.email);
        assert_eq!(response.phone, request.phone);
        assert_eq!(response.address, request.address);
        assert_eq!(response.birth_date, request.birth_date);
        assert_eq!(Some(response.base_salary), request.base_salary);
    }

    #[test]
    fn test_serializes_camel_case_with_numeric_salary() {
        let response = UserResponse {
            id: "u-1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
            address: "Calle 1".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            base_salary: Decimal::from(1500),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["birthDate"], "1990-04-12");
        assert_eq!(json["baseSalary"], 1500.0);
    }

    #[test]
    fn test_salary_serializes_every_digit() {
        let salary = Decimal::from_str("1234567.123456789012345").unwrap();
        let response = UserResponse {
            id: "u-1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            phone: "3001234567".to_string(),
            address: "Calle 1".to_string(),
            birth_date: None,
            base_salary: salary,
        };

        let text = serde_json::to_string(&response).unwrap();
        assert!(text.contains(r#""baseSalary":1234567.123456789012345"#));

        let back: UserResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(back.base_salary, salary);
    }
}
