//! # Services Module
//!
//! Application services that sit between sessions and the outside
//! world. Currently just dispatch: draft validation plus the transport
//! port a wire adapter implements.

pub mod dispatch;

pub use dispatch::{prepare, DispatchService, Transport};
