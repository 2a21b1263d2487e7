//! # Session Module
//!
//! The editing container and its observer plumbing: the loosely-typed
//! [`Draft`], the [`RequestSession`] that owns and mutates it, and the
//! [`SessionEvent`]s subscribers receive after every committed change.

pub mod draft;
pub mod events;
pub mod state;

// Re-export the session surface for easy access
pub use draft::Draft;
pub use events::{SessionEvent, SessionEventHandler};
pub use state::RequestSession;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn session_surface_should_be_accessible() {
        let _draft = Draft::new();
        let _event = SessionEvent::DraftReset;
        let _session = RequestSession::new();
    }

    #[test]
    fn subscription_should_observe_edits() {
        let mut session = RequestSession::new();
        let received = Arc::new(Mutex::new(false));
        let received_clone = received.clone();

        session.subscribe(Box::new(move |_| {
            *received_clone.lock().unwrap() = true;
        }));

        session.set_url("https://example.com");

        assert!(*received.lock().unwrap());
    }
}
