//! # Draft Request
//!
//! The in-progress request being edited. Deliberately looser than
//! [`crate::models::HttpRequest`]: the method is a free string (`""`
//! meaning "not yet chosen") and the header/param lists carry blank
//! placeholder rows for the editor. Reconciling a draft into a typed
//! `HttpRequest` is the dispatcher's job, not the draft's.
//!
//! List semantics are the contract an editing surface relies on:
//! insertion order is display order, removal shifts survivors left
//! without reordering, and an out-of-range index is a silent no-op
//! signalled through the return value.

use crate::models::{KeyValuePair, RequestBody};

/// The editing state for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    method: String,
    url: String,
    headers: Vec<KeyValuePair>,
    params: Vec<KeyValuePair>,
    body: Option<RequestBody>,
    timeout: Option<u64>,
}

impl Draft {
    /// A fresh draft: unset method, empty URL, one blank placeholder row
    /// in each list, no body, no timeout.
    pub fn new() -> Self {
        Self {
            method: String::new(),
            url: String::new(),
            headers: vec![KeyValuePair::blank()],
            params: vec![KeyValuePair::blank()],
            body: None,
            timeout: None,
        }
    }

    /// A draft seeded with configured defaults: the given header rows
    /// first, in order, then the usual blank placeholder row.
    pub fn seeded(headers: Vec<KeyValuePair>, timeout: Option<u64>) -> Self {
        let mut rows = headers;
        rows.push(KeyValuePair::blank());
        Self {
            method: String::new(),
            url: String::new(),
            headers: rows,
            params: vec![KeyValuePair::blank()],
            body: None,
            timeout,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn headers(&self) -> &[KeyValuePair] {
        &self.headers
    }

    pub fn params(&self) -> &[KeyValuePair] {
        &self.params
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, body: Option<RequestBody>) {
        self.body = body;
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<u64>) {
        self.timeout = timeout;
    }

    /// Append a blank header row. Returns the new row's index.
    pub fn add_header(&mut self) -> usize {
        self.headers.push(KeyValuePair::blank());
        self.headers.len() - 1
    }

    /// Remove the header row at `index`, shifting later rows left.
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove_header(&mut self, index: usize) -> Option<KeyValuePair> {
        if index >= self.headers.len() {
            return None;
        }
        Some(self.headers.remove(index))
    }

    /// Overwrite the header row at `index`. Returns `false` without
    /// touching the list when the index is out of range.
    pub fn update_header(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.headers.get_mut(index) {
            Some(pair) => {
                pair.key = key.into();
                pair.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Append a blank param row. Returns the new row's index.
    pub fn add_param(&mut self) -> usize {
        self.params.push(KeyValuePair::blank());
        self.params.len() - 1
    }

    /// Remove the param row at `index`. Same contract as
    /// [`Draft::remove_header`].
    pub fn remove_param(&mut self, index: usize) -> Option<KeyValuePair> {
        if index >= self.params.len() {
            return None;
        }
        Some(self.params.remove(index))
    }

    /// Overwrite the param row at `index`. Same contract as
    /// [`Draft::update_header`].
    pub fn update_param(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.params.get_mut(index) {
            Some(pair) => {
                pair.key = key.into();
                pair.value = value.into();
                true
            }
            None => false,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_should_create_with_placeholder_rows() {
        let draft = Draft::new();

        assert_eq!(draft.method(), "");
        assert_eq!(draft.url(), "");
        assert_eq!(draft.headers(), &[KeyValuePair::blank()]);
        assert_eq!(draft.params(), &[KeyValuePair::blank()]);
        assert!(draft.body().is_none());
        assert!(draft.timeout().is_none());
    }

    #[test]
    fn set_url_should_store_exactly_what_was_given() {
        let mut draft = Draft::new();

        draft.set_url("https://example.com/a?b=c");
        assert_eq!(draft.url(), "https://example.com/a?b=c");

        draft.set_url("");
        assert_eq!(draft.url(), "");

        draft.set_url("ctrl\tchars\nallowed");
        assert_eq!(draft.url(), "ctrl\tchars\nallowed");
    }

    #[test]
    fn add_header_should_append_blank_row_and_return_index() {
        let mut draft = Draft::new();

        assert_eq!(draft.add_header(), 1);
        assert_eq!(draft.add_header(), 2);
        assert_eq!(draft.headers().len(), 3);
        assert!(draft.headers().iter().all(KeyValuePair::is_blank));
    }

    #[test]
    fn remove_header_should_keep_survivors_in_order() {
        let mut draft = Draft::new();
        draft.update_header(0, "A", "1");
        draft.add_header();
        draft.update_header(1, "B", "2");
        draft.add_header();
        draft.update_header(2, "C", "3");

        let removed = draft.remove_header(1);

        assert_eq!(removed, Some(KeyValuePair::new("B", "2")));
        assert_eq!(
            draft.headers(),
            &[KeyValuePair::new("A", "1"), KeyValuePair::new("C", "3")]
        );
    }

    #[test]
    fn remove_header_should_ignore_out_of_range_index() {
        let mut draft = Draft::new();
        draft.update_header(0, "A", "1");

        assert_eq!(draft.remove_header(1), None);
        assert_eq!(draft.remove_header(usize::MAX), None);
        assert_eq!(draft.headers(), &[KeyValuePair::new("A", "1")]);
    }

    #[test]
    fn remove_header_should_accept_emptying_the_list() {
        let mut draft = Draft::new();

        assert!(draft.remove_header(0).is_some());
        assert!(draft.headers().is_empty());
        assert_eq!(draft.remove_header(0), None);
    }

    #[test]
    fn update_header_should_signal_out_of_range() {
        let mut draft = Draft::new();

        assert!(draft.update_header(0, "Accept", "application/json"));
        assert!(!draft.update_header(5, "X", "y"));
        assert_eq!(
            draft.headers(),
            &[KeyValuePair::new("Accept", "application/json")]
        );
    }

    #[test]
    fn param_list_should_mirror_header_semantics() {
        let mut draft = Draft::new();

        assert_eq!(draft.add_param(), 1);
        draft.update_param(0, "page", "1");
        draft.update_param(1, "limit", "50");

        assert_eq!(draft.remove_param(7), None);
        assert_eq!(draft.remove_param(0), Some(KeyValuePair::new("page", "1")));
        assert_eq!(draft.params(), &[KeyValuePair::new("limit", "50")]);
    }

    #[test]
    fn seeded_draft_should_place_blank_row_last() {
        let draft = Draft::seeded(
            vec![
                KeyValuePair::new("User-Agent", "pigeon/0.1"),
                KeyValuePair::new("Accept", "*/*"),
            ],
            Some(30),
        );

        assert_eq!(draft.headers().len(), 3);
        assert_eq!(draft.headers()[0].key, "User-Agent");
        assert_eq!(draft.headers()[1].key, "Accept");
        assert!(draft.headers()[2].is_blank());
        assert_eq!(draft.timeout(), Some(30));
        assert_eq!(draft.params(), &[KeyValuePair::blank()]);
    }
}
