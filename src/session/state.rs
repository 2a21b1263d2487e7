//! # Request Session
//!
//! The mutable container behind one request tab: the draft being
//! edited, the response from the most recent dispatch, and the
//! observers watching both. All writes go through the session so that
//! every committed change produces exactly one [`SessionEvent`],
//! delivered synchronously to every subscriber before the mutating
//! call returns. Readers only ever get shared references, which keeps
//! the session the single writer of its own state.
//!
//! Sessions are independent values. An application with several open
//! tabs holds several sessions; nothing is shared between them.

use crate::config::SessionDefaults;
use crate::models::{HttpResponse, KeyValuePair, RequestBody};
use crate::session::draft::Draft;
use crate::session::events::{SessionEvent, SessionEventHandler};

/// Owns a draft request, an optional response, and the subscribers
/// notified on every committed change.
pub struct RequestSession {
    draft: Draft,
    response: Option<HttpResponse>,
    handlers: Vec<SessionEventHandler>,
}

impl RequestSession {
    /// Session around a fresh draft with no response and no subscribers.
    pub fn new() -> Self {
        Self {
            draft: Draft::new(),
            response: None,
            handlers: Vec::new(),
        }
    }

    /// Session whose draft starts from configured defaults instead of
    /// blank: default header rows first, then the blank placeholder
    /// row, and the configured timeout already applied.
    pub fn with_defaults(defaults: &SessionDefaults) -> Self {
        Self {
            draft: Draft::seeded(defaults.headers().to_vec(), defaults.timeout()),
            response: None,
            handlers: Vec::new(),
        }
    }

    /// Subscribe to committed changes. Handlers run synchronously, in
    /// subscription order, inside the mutating call; keep them short.
    pub fn subscribe(&mut self, handler: SessionEventHandler) {
        self.handlers.push(handler);
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        let new_method = method.into();
        let old_method = self.draft.method().to_string();
        self.draft.set_method(new_method.clone());
        tracing::debug!("Session method changed: {:?} -> {:?}", old_method, new_method);
        self.notify(&SessionEvent::MethodChanged {
            old_method,
            new_method,
        });
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        let new_url = url.into();
        let old_url = self.draft.url().to_string();
        self.draft.set_url(new_url.clone());
        self.notify(&SessionEvent::UrlChanged { old_url, new_url });
    }

    /// Append a blank header row and notify. Returns the row's index.
    pub fn add_header(&mut self) -> usize {
        let index = self.draft.add_header();
        self.notify(&SessionEvent::HeaderAdded { index });
        index
    }

    /// Remove the header row at `index`. Out-of-range indices change
    /// nothing, notify nobody, and return `None`.
    pub fn remove_header(&mut self, index: usize) -> Option<KeyValuePair> {
        let pair = self.draft.remove_header(index)?;
        tracing::debug!("Removed header row {} ({:?})", index, pair.key);
        self.notify(&SessionEvent::HeaderRemoved {
            index,
            pair: pair.clone(),
        });
        Some(pair)
    }

    /// Overwrite the header row at `index`. Returns `false`, changing
    /// nothing and notifying nobody, when the index is out of range.
    pub fn update_header(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let pair = KeyValuePair::new(key, value);
        if !self
            .draft
            .update_header(index, pair.key.clone(), pair.value.clone())
        {
            return false;
        }
        self.notify(&SessionEvent::HeaderUpdated { index, pair });
        true
    }

    /// Append a blank param row and notify. Returns the row's index.
    pub fn add_param(&mut self) -> usize {
        let index = self.draft.add_param();
        self.notify(&SessionEvent::ParamAdded { index });
        index
    }

    /// Remove the param row at `index`. Same contract as
    /// [`RequestSession::remove_header`].
    pub fn remove_param(&mut self, index: usize) -> Option<KeyValuePair> {
        let pair = self.draft.remove_param(index)?;
        tracing::debug!("Removed param row {} ({:?})", index, pair.key);
        self.notify(&SessionEvent::ParamRemoved {
            index,
            pair: pair.clone(),
        });
        Some(pair)
    }

    /// Overwrite the param row at `index`. Same contract as
    /// [`RequestSession::update_header`].
    pub fn update_param(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let pair = KeyValuePair::new(key, value);
        if !self
            .draft
            .update_param(index, pair.key.clone(), pair.value.clone())
        {
            return false;
        }
        self.notify(&SessionEvent::ParamUpdated { index, pair });
        true
    }

    /// Replace or clear the draft body.
    pub fn set_body(&mut self, body: Option<RequestBody>) {
        self.draft.set_body(body);
        self.notify(&SessionEvent::BodyChanged);
    }

    /// Set or clear the per-request timeout, in seconds.
    pub fn set_timeout(&mut self, timeout: Option<u64>) {
        self.draft.set_timeout(timeout);
        self.notify(&SessionEvent::TimeoutChanged { timeout });
    }

    /// Attach the response from a completed dispatch, replacing any
    /// previous one.
    pub fn attach_response(&mut self, response: HttpResponse) {
        let code = response.status.code;
        let reason = response.status.reason.clone();
        self.response = Some(response);
        tracing::debug!("Session received response: {} {}", code, reason);
        self.notify(&SessionEvent::ResponseReceived { code, reason });
    }

    /// Detach and return the current response. Notifies only when a
    /// response was actually present.
    pub fn take_response(&mut self) -> Option<HttpResponse> {
        let response = self.response.take();
        if response.is_some() {
            self.notify(&SessionEvent::ResponseCleared);
        }
        response
    }

    /// Drop the current response, if any.
    pub fn clear_response(&mut self) {
        let _ = self.take_response();
    }

    /// Return the whole session to its fresh state: blank draft, no
    /// response. Emits `ResponseCleared` first when a response was
    /// attached, then `DraftReset`.
    pub fn reset(&mut self) {
        self.clear_response();
        self.draft = Draft::new();
        tracing::debug!("Session reset to fresh draft");
        self.notify(&SessionEvent::DraftReset);
    }

    /// Swap in a complete draft, e.g. one loaded from a saved
    /// collection. Any attached response belongs to the old draft and
    /// is cleared first.
    pub fn replace_draft(&mut self, draft: Draft) {
        self.clear_response();
        self.draft = draft;
        tracing::debug!("Session draft replaced");
        self.notify(&SessionEvent::DraftReplaced);
    }

    fn notify(&self, event: &SessionEvent) {
        for handler in &self.handlers {
            handler(event);
        }
    }
}

impl Default for RequestSession {
    fn default() -> Self {
        Self::new()
    }
}
