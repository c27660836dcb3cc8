pub mod tracing;

pub use self::tracing::{trace_requests, REQUEST_ID_HEADER};
