//! # Pigeon Core - Request Editing Engine for an API Client
//!
//! The state layer behind an interactive API-testing client: typed
//! HTTP request/response models, an observable editing session per
//! open request tab, and the dispatch seam validated requests leave
//! through. Rendering, persistence, and the actual wire client live
//! in the embedding application.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    edits     ┌────────────────┐  SessionEvent  ┌───────────┐
//! │ Embedder │─────────────►│ RequestSession │───────────────►│ Observers │
//! │ (UI, CLI)│              │ Draft+Response │                │           │
//! └──────────┘              └────────────────┘                └───────────┘
//!                                   │ draft
//!                                   ▼
//!                           ┌────────────────┐    HttpRequest
//!                           │ DispatchService│───────────────► Transport
//!                           │ prepare + send │◄─────────────── (embedder's
//!                           └────────────────┘    HttpResponse  wire adapter)
//! ```
//!
//! ## Example
//!
//! ```
//! use pigeon_core::{RequestSession, SessionEvent};
//!
//! let mut session = RequestSession::new();
//! session.subscribe(Box::new(|event| {
//!     if let SessionEvent::UrlChanged { new_url, .. } = event {
//!         println!("url is now {new_url}");
//!     }
//! }));
//!
//! session.set_method("GET");
//! session.set_url("https://httpbin.org/get");
//! assert_eq!(session.draft().url(), "https://httpbin.org/get");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

// Re-export main types for easy access
pub use config::SessionDefaults;
pub use error::{Error, Result};
pub use models::*;
pub use services::{prepare, DispatchService, Transport};
pub use session::{Draft, RequestSession, SessionEvent, SessionEventHandler};
