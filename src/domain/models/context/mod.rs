pub mod request_context;

pub use request_context::{RequestContext, TraceId};
