//! 모든 엔드포인트가 공유하는 응답 DTO

pub mod api_response;
pub mod error_item;

pub use api_response::ApiResponse;
pub use error_item::ErrorItem;
