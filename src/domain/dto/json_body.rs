//! JSON 본문 디코딩
//!
//! 요청 DTO는 `serde` derive(`deny_unknown_fields`)로 디코딩하고,
//! 실패는 첫 번째 문제 하나를 담은 `AppError::ValidationError`로 변환합니다.
//! 필드명은 `serde_path_to_error`가 추적한 경로의 마지막 키입니다.
//!
//! | 상황 | field | code |
//! |------|-------|------|
//! | 파싱 불가한 본문 (빈 본문 포함) | `body` | `MalformedJson` |
//! | 최상위 값이 객체가 아님 | `body` | `InvalidType` |
//! | 스키마에 없는 키 | 키 이름 | `UnknownField` |
//! | 값의 타입 불일치 | 키 이름 | `InvalidType` |
//!
//! 10진수 필드는 `arbitrary_precision` 숫자 원문에서 직접 변환하므로
//! f64를 거치지 않습니다.

use std::str::FromStr;
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::error::Category;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::ErrorItem;

/// 10진수 필드의 기대값 표현 (타입 불일치 메시지 구분에 사용)
pub const DECIMAL_EXPECTATION: &str = "a decimal number";

/// 본문을 DTO로 디코딩합니다. 검증은 수행하지 않습니다.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value: T = serde_path_to_error::deserialize(&mut deserializer).map_err(to_app_error)?;
    deserializer.end().map_err(|e| malformed(&e))?;

    Ok(value)
}

/// 문자열 필드. `null`은 빈 문자열
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 10진수 필드. JSON 숫자 또는 숫자 문자열을 받으며 `null`은 값 없음
///
/// `Decimal` 범위를 벗어난 숫자는 부호에 맞는 경계값으로 포화시켜
/// 범위 검증이 `DecimalMax`/`DecimalMin`으로 보고하도록 합니다.
pub fn exact_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(other) => {
            return Err(D::Error::invalid_type(unexpected(&other), &DECIMAL_EXPECTATION));
        }
    };

    parse_decimal(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&raw), &DECIMAL_EXPECTATION))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let parsed = if raw.contains(['e', 'E']) {
        Decimal::from_scientific(raw)
    } else {
        Decimal::from_str(raw)
    };

    match parsed {
        Ok(value) => Some(value),
        Err(_) if is_numeric_literal(raw) => raw.parse::<f64>().ok().map(saturate),
        Err(_) => None,
    }
}

fn is_numeric_literal(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

fn saturate(value: f64) -> Decimal {
    match (value.is_sign_negative(), value.abs() < 1.0) {
        (false, false) => Decimal::MAX,
        (true, false) => Decimal::MIN,
        (false, true) => Decimal::new(1, 28),
        (true, true) => Decimal::new(-1, 28),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        _ => Unexpected::Other("value"),
    }
}

fn to_app_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let field = last_key(err.path());
    let inner = err.into_inner();

    match inner.classify() {
        Category::Data => data_error(field, &inner),
        Category::Syntax | Category::Eof | Category::Io => malformed(&inner),
    }
}

fn last_key(path: &Path) -> Option<String> {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(key.clone()),
            _ => None,
        })
        .last()
}

fn data_error(field: Option<String>, err: &serde_json::Error) -> AppError {
    let detail = err.to_string();

    if detail.starts_with("unknown field") {
        let field = field
            .or_else(|| quoted_name(&detail))
            .unwrap_or_else(|| ErrorItem::BODY.to_string());
        let message = format!("'{}' 필드는 존재하지 않습니다.", field);
        return AppError::field(field, "UnknownField", message);
    }

    let Some(field) = field else {
        return AppError::field(
            ErrorItem::BODY,
            "InvalidType",
            format!("'{}' 필드의 형식이 올바르지 않습니다. JSON 객체 형식이어야 합니다.", ErrorItem::BODY),
        );
    };

    let message = if detail.contains(DECIMAL_EXPECTATION) {
        format!("'{}' 필드는 숫자여야 합니다.", field)
    } else {
        format!("'{}' 필드의 형식이 올바르지 않습니다.", field)
    };
    AppError::field(field, "InvalidType", message)
}

/// serde 메시지의 첫 번째 `이름` 추출
fn quoted_name(detail: &str) -> Option<String> {
    let start = detail.find('`')? + 1;
    let len = detail[start..].find('`')?;
    Some(detail[start..start + len].to_string())
}

fn malformed(err: &serde_json::Error) -> AppError {
    AppError::field(
        ErrorItem::BODY,
        "MalformedJson",
        format!("JSON 형식이 올바르지 않습니다: {}", err),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields, default)]
    struct Sample {
        #[serde(deserialize_with = "text_or_empty")]
        name: String,
        #[serde(deserialize_with = "exact_decimal")]
        amount: Option<Decimal>,
        start_day: Option<NaiveDate>,
    }

    fn single_item(result: AppResult<Sample>) -> ErrorItem {
        match result {
            Err(AppError::ValidationError(mut items)) => {
                assert_eq!(items.len(), 1);
                items.remove(0)
            }
            other => panic!("Expected single validation item, got {:?}", other),
        }
    }

    #[test]
    fn test_decodes_known_fields() {
        let sample: Sample =
            decode(r#"{"name":"Ana","amount":1500.50,"startDay":"1990-01-31"}"#.as_bytes()).unwrap();

        assert_eq!(sample.name, "Ana");
        assert_eq!(sample.amount, Some(Decimal::new(150050, 2)));
        assert_eq!(sample.start_day, NaiveDate::from_ymd_opt(1990, 1, 31));
    }

    #[test]
    fn test_decimal_keeps_every_digit() {
        let sample: Sample =
            decode(r#"{"amount":1234567.123456789012345}"#.as_bytes()).unwrap();

        let expected = Decimal::from_str("1234567.123456789012345").unwrap();
        assert_eq!(sample.amount, Some(expected));
        assert_eq!(sample.amount.unwrap().to_string(), "1234567.123456789012345");
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let sample: Sample = decode(r#"{"name":null}"#.as_bytes()).unwrap();

        assert_eq!(sample.name, "");
        assert_eq!(sample.amount, None);
        assert_eq!(sample.start_day, None);
    }

    #[test]
    fn test_numeric_string_and_exponent_are_accepted() {
        let sample: Sample = decode(r#"{"amount":" 42 "}"#.as_bytes()).unwrap();
        assert_eq!(sample.amount, Some(Decimal::from(42)));

        let sample: Sample = decode(r#"{"amount":2.5e6}"#.as_bytes()).unwrap();
        assert_eq!(sample.amount, Some(Decimal::from(2_500_000)));
    }

    #[test]
    fn test_out_of_range_numbers_saturate() {
        let sample: Sample = decode(r#"{"amount":1e30}"#.as_bytes()).unwrap();
        assert_eq!(sample.amount, Some(Decimal::MAX));

        let sample: Sample = decode(r#"{"amount":-1e30}"#.as_bytes()).unwrap();
        assert_eq!(sample.amount, Some(Decimal::MIN));

        let sample: Sample =
            decode(r#"{"amount":"123456789012345678901234567890123"}"#.as_bytes()).unwrap();
        assert_eq!(sample.amount, Some(Decimal::MAX));
    }

    #[test]
    fn test_malformed_json() {
        let item = single_item(decode(r#"{"name": "Ana",}"#.as_bytes()));

        assert_eq!(item.field, "body");
        assert_eq!(item.code, "MalformedJson");
    }

    #[test]
    fn test_empty_body_is_malformed() {
        let item = single_item(decode(b""));
        assert_eq!(item.code, "MalformedJson");
    }

    #[test]
    fn test_trailing_characters_are_malformed() {
        let item = single_item(decode(r#"{"name":"Ana"} x"#.as_bytes()));
        assert_eq!(item.code, "MalformedJson");
    }

    #[test]
    fn test_non_object_body() {
        let item = single_item(decode(b"[1,2]"));

        assert_eq!(item.field, "body");
        assert_eq!(item.code, "InvalidType");
    }

    #[test]
    fn test_unknown_field() {
        let item = single_item(decode(r#"{"name":"Ana","nickname":"A"}"#.as_bytes()));

        assert_eq!(item.field, "nickname");
        assert_eq!(item.code, "UnknownField");
        assert!(item.message.contains("nickname"));
    }

    #[test]
    fn test_numeric_type_mismatch() {
        let item = single_item(decode(r#"{"amount":"lots"}"#.as_bytes()));

        assert_eq!(item.field, "amount");
        assert_eq!(item.code, "InvalidType");
        assert_eq!(item.message, "'amount' 필드는 숫자여야 합니다.");

        let item = single_item(decode(r#"{"amount":true}"#.as_bytes()));
        assert_eq!(item.message, "'amount' 필드는 숫자여야 합니다.");
    }

    #[test]
    fn test_generic_type_mismatch() {
        let item = single_item(decode(r#"{"startDay":"31/01/1990"}"#.as_bytes()));

        assert_eq!(item.field, "startDay");
        assert_eq!(item.code, "InvalidType");
        assert_eq!(item.message, "'startDay' 필드의 형식이 올바르지 않습니다.");

        let item = single_item(decode(r#"{"name":5}"#.as_bytes()));
        assert_eq!(item.field, "name");
        assert_eq!(item.code, "InvalidType");
    }

    #[test]
    fn test_first_problem_in_document_order_wins() {
        let item = single_item(decode(r#"{"amount":true,"extra":1}"#.as_bytes()));
        assert_eq!(item.field, "amount");
    }
}
