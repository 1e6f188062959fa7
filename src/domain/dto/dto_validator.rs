//! DTO 검증기
//!
//! `validator` 크레이트의 [`ValidationErrors`]를 와이어 필드명 기준의
//! [`ErrorItem`] 목록으로 변환합니다. 결과 순서는 DTO 스키마의 필드
//! 선언 순서이며, 한 필드의 위반은 모두 보고하되 존재 여부 위반을 먼저 둡니다.

use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::ErrorItem;
use crate::utils::string_utils::required_message;

/// 와이어 스키마를 선언하는 DTO
pub trait WireSchema {
    /// `(Rust 필드명, JSON 키)` 목록, 선언 순서
    const FIELDS: &'static [(&'static str, &'static str)];
}

/// `validator` 기본 코드 → 응답 오류 코드
const CODE_ALIASES: &[(&str, &str)] = &[
    ("required", "NotNull"),
    ("email", "Email"),
    ("regex", "Pattern"),
];

/// 같은 필드의 다른 위반보다 앞에 보고되는 코드
///
/// `validator` derive는 내장 규칙을 `custom` 규칙보다 먼저 실행하므로
/// 빈 이메일은 `email`과 `NotBlank`를 함께 가집니다.
const PRESENCE_CODES: &[&str] = &["NotBlank", "required"];

/// 핸들러에 주입되는 DTO 검증기
#[derive(Debug, Clone, Default)]
pub struct DtoValidator;

impl DtoValidator {
    pub fn new() -> Self {
        Self
    }

    /// DTO를 검증합니다. 모든 필드를 검사한 뒤 위반 목록을 한 번에 반환합니다.
    pub fn validate<T>(&self, dto: &T) -> AppResult<()>
    where
        T: Validate + WireSchema,
    {
        match dto.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(AppError::ValidationError(Self::to_items(&errors, T::FIELDS))),
        }
    }

    fn to_items(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Vec<ErrorItem> {
        let field_errors = errors.field_errors();

        fields
            .iter()
            .flat_map(|&(name, wire)| {
                let mut errs: Vec<&ValidationError> = field_errors
                    .get(name)
                    .map(|errs| errs.iter().collect())
                    .unwrap_or_default();
                errs.sort_by_key(|err| !PRESENCE_CODES.contains(&&*err.code));

                errs.into_iter().map(move |err| Self::to_item(wire, err))
            })
            .collect()
    }

    fn to_item(wire: &str, error: &ValidationError) -> ErrorItem {
        let code = CODE_ALIASES
            .iter()
            .find(|(raw, _)| error.code == *raw)
            .map(|(_, alias)| alias.to_string())
            .unwrap_or_else(|| error.code.to_string());

        let message = match &error.message {
            Some(message) => message.to_string(),
            None => required_message(wire),
        };

        ErrorItem::new(wire, code, message)
    }
}
