//! # Models Module
//!
//! Value types for the request and response halves of an HTTP exchange.
//! Everything here is plain data with constructors that enforce the
//! enumerations; mutable editing state lives in [`crate::session`].

pub mod request;
pub mod response;

// Re-export the model types for easy access
pub use request::{
    FormDataItem, FormDataValue, HttpRequest, KeyValuePair, Method, RawBody, RawBodyType,
    RequestBody,
};
pub use response::{HttpResponse, ResponseBody, Size, Status, Timing};
