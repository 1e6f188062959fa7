//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 필드 누락 메시지
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(required_message("firstName"), "firstName은(는) 필수입니다");
/// ```
pub fn required_message(field_name: &str) -> String {
    format!("{}은(는) 필수입니다", field_name)
}
