//! # Session Events
//!
//! Events emitted after a session commits a change.
//! Observers receive these to refresh whatever they derive from the
//! session, instead of polling or diffing the draft themselves.

use crate::models::KeyValuePair;

/// Events emitted when session state changes
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Draft method string changed
    MethodChanged {
        old_method: String,
        new_method: String,
    },

    /// Draft URL changed
    UrlChanged { old_url: String, new_url: String },

    /// Blank header row appended at `index`
    HeaderAdded { index: usize },

    /// Header row removed; later rows shifted left
    HeaderRemoved { index: usize, pair: KeyValuePair },

    /// Header row at `index` overwritten with `pair`
    HeaderUpdated { index: usize, pair: KeyValuePair },

    /// Blank param row appended at `index`
    ParamAdded { index: usize },

    /// Param row removed; later rows shifted left
    ParamRemoved { index: usize, pair: KeyValuePair },

    /// Param row at `index` overwritten with `pair`
    ParamUpdated { index: usize, pair: KeyValuePair },

    /// Draft body replaced or cleared
    BodyChanged,

    /// Draft timeout changed
    TimeoutChanged { timeout: Option<u64> },

    /// A response was attached to the session
    ResponseReceived { code: u16, reason: String },

    /// The attached response was discarded
    ResponseCleared,

    /// Draft returned to its fresh state
    DraftReset,

    /// Draft wholesale-replaced, e.g. by a loaded collection entry
    DraftReplaced,
}

/// Callback invoked with every committed session change.
pub type SessionEventHandler = Box<dyn Fn(&SessionEvent) + Send + Sync>;
