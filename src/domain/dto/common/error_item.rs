use serde::{Deserialize, Serialize};

/// 필드 단위 오류 항목
///
/// `code`는 위반된 제약의 분류 태그입니다.
/// (`NotBlank`, `Email`, `Pattern`, `Past`, `NotNull`, `DecimalMin`,
/// `DecimalMax`, `MalformedJson`, `UnknownField`, `InvalidType`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// 와이어 필드명 (camelCase). 경로가 없으면 `body`
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ErrorItem {
    /// 필드 경로가 없는 본문 오류에 사용하는 필드명
    pub const BODY: &'static str = "body";

    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}
