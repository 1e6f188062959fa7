//! 요청 처리 중에 사용하는 값 객체

pub mod context;

pub use context::{RequestContext, TraceId};
