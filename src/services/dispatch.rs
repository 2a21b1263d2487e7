//! # Dispatch Service
//!
//! Turns a loosely-typed [`Draft`] into a validated [`HttpRequest`]
//! and hands it to a [`Transport`] for delivery. The transport is a
//! port: the crate defines the seam, embedders plug in whatever wire
//! adapter they use, and tests plug in fakes.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{HttpRequest, HttpResponse, KeyValuePair, Method};
use crate::session::Draft;

/// Delivers a prepared request and produces a response.
///
/// Implementations own everything wire-level: connections, redirects,
/// filling in response timing and sizes.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Reconcile a draft into a request ready to send.
///
/// The method string must parse as a known HTTP method and the URL
/// must be non-empty; otherwise the draft is rejected. Fully blank
/// header and param rows are editor placeholders and are dropped.
/// Partially filled rows, duplicates, and row order all pass through
/// untouched.
pub fn prepare(draft: &Draft) -> Result<HttpRequest> {
    if draft.method().is_empty() {
        return Err(Error::UnsetMethod);
    }
    let method: Method = draft.method().parse()?;

    if draft.url().is_empty() {
        return Err(Error::UnsetUrl);
    }

    let mut request = HttpRequest::new(method, draft.url());
    request.headers = without_blank_rows(draft.headers());
    request.params = without_blank_rows(draft.params());
    request.body = draft.body().cloned();
    request.timeout = draft.timeout();
    Ok(request)
}

fn without_blank_rows(rows: &[KeyValuePair]) -> Vec<KeyValuePair> {
    rows.iter()
        .filter(|pair| !pair.is_blank())
        .cloned()
        .collect()
}

/// Prepares drafts and sends them through a [`Transport`].
pub struct DispatchService<T>
where
    T: Transport,
{
    transport: T,
}

impl<T> DispatchService<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validate `draft`, send it, and return the transport's response.
    /// Rejected drafts never reach the transport.
    pub async fn dispatch(&self, draft: &Draft) -> Result<HttpResponse> {
        let request = prepare(draft)?;
        tracing::debug!(
            "Dispatching {} request to {}",
            request.method.as_str(),
            request.url
        );
        let response = self.transport.send(&request).await;
        match &response {
            Ok(resp) => {
                tracing::debug!("Dispatch completed: {}", resp.status.as_string())
            }
            Err(err) => tracing::debug!("Dispatch failed: {}", err),
        }
        response
    }
}
