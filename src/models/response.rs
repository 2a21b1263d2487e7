//! # HTTP Response Model
//!
//! Value types describing a completed HTTP exchange: status, response
//! headers, the tagged body variants, timing, and size accounting.
//! Response headers are a lookup structure rather than an ordered list,
//! since the client only ever reads them. Classification of raw payloads
//! into body variants lives here so response receivers stay free of
//! model logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Response status line: numeric code plus reason text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: u16,
    pub reason: String,
}

impl Status {
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    /// True for 2xx codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// True for 4xx codes.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    /// True for 5xx codes.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }

    /// Status as a display string, e.g. "200 OK".
    pub fn as_string(&self) -> String {
        format!("{} {}", self.code, self.reason)
    }
}

/// Response body variants, discriminated by tag. Same externally tagged
/// serde convention as the request-side encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResponseBody {
    Empty,
    Text(String),
    Json(serde_json::Value),
    Html(String),
    Xml(String),
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// Pick the body variant for a payload based on its declared content
    /// type.
    ///
    /// Empty payloads become [`ResponseBody::Empty`] regardless of type.
    /// A JSON content type that fails to parse degrades to `Text` rather
    /// than being dropped. Unrecognized content types stay `Binary`, the
    /// caller's bytes untouched.
    pub fn classify(content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return ResponseBody::Empty;
        }

        let content_type = content_type.map(|s| s.to_ascii_lowercase()).unwrap_or_default();

        if content_type.contains("application/json") {
            match serde_json::from_slice(&bytes) {
                Ok(value) => ResponseBody::Json(value),
                Err(_) => ResponseBody::Text(String::from_utf8_lossy(&bytes).into_owned()),
            }
        } else if content_type.contains("text/html") {
            ResponseBody::Html(String::from_utf8_lossy(&bytes).into_owned())
        } else if content_type.contains("application/xml") || content_type.contains("text/xml") {
            ResponseBody::Xml(String::from_utf8_lossy(&bytes).into_owned())
        } else if content_type.starts_with("text/") {
            ResponseBody::Text(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            ResponseBody::Binary(bytes)
        }
    }

    /// Byte count this body contributes to [`Size`]. JSON is measured by
    /// its serialized form.
    pub fn byte_len(&self) -> usize {
        match self {
            ResponseBody::Empty => 0,
            ResponseBody::Text(s) | ResponseBody::Html(s) | ResponseBody::Xml(s) => s.len(),
            ResponseBody::Json(v) => v.to_string().len(),
            ResponseBody::Binary(b) => b.len(),
        }
    }
}

/// Exchange timing in milliseconds. `duration` is always derived from the
/// endpoints at construction; there is no way to build a timing whose
/// duration disagrees with `end - start`. Deserialization goes through
/// [`Timing::new`] as well, so serialized input cannot smuggle in a
/// disagreeing duration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "TimingEndpoints")]
pub struct Timing {
    start: f64,
    end: f64,
    duration: f64,
}

/// Deserialization shape for [`Timing`]: endpoints only, any serialized
/// `duration` field is ignored and recomputed.
#[derive(Deserialize)]
struct TimingEndpoints {
    start: f64,
    end: f64,
}

impl TryFrom<TimingEndpoints> for Timing {
    type Error = Error;

    fn try_from(endpoints: TimingEndpoints) -> Result<Self> {
        Timing::new(endpoints.start, endpoints.end)
    }
}

impl Timing {
    /// Build a timing from its endpoints. Rejects negative endpoints and
    /// `end < start`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start < 0.0 || end < start {
            return Err(Error::InvalidTiming { start, end });
        }
        Ok(Self {
            start,
            end,
            duration: end - start,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Byte counts for the headers block and the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub headers: usize,
    pub body: usize,
}

impl Size {
    /// Measure a header map and a body the way the client reports sizes:
    /// headers as the sum of name and value lengths, body via
    /// [`ResponseBody::byte_len`].
    pub fn measure(headers: &HashMap<String, String>, body: &ResponseBody) -> Self {
        Self {
            headers: headers.iter().map(|(k, v)| k.len() + v.len()).sum(),
            body: body.byte_len(),
        }
    }
}

/// A completed HTTP response as the client displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: Status,
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
    pub timing: Timing,
    pub size: Size,
}

impl HttpResponse {
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            status: Status::new(code, reason),
            headers: HashMap::new(),
            body: ResponseBody::Empty,
            timing: Timing::default(),
            size: Size::default(),
        }
    }

    /// Add a response header, keeping the size accounting current.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self.size.headers = self.headers.iter().map(|(k, v)| k.len() + v.len()).sum();
        self
    }

    /// Set the body, keeping the size accounting current.
    pub fn with_body(mut self, body: ResponseBody) -> Self {
        self.size.body = body.byte_len();
        self.body = body;
        self
    }

    /// Set timing from endpoints. Fails the same way [`Timing::new`] does.
    pub fn with_timing(mut self, start: f64, end: f64) -> Result<Self> {
        self.timing = Timing::new(start, end)?;
        Ok(self)
    }

    /// Content-Type header value, matched case-insensitively.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Body rendered as text, when the variant has a textual form.
    pub fn body_as_text(&self) -> Option<String> {
        match &self.body {
            ResponseBody::Text(s) | ResponseBody::Html(s) | ResponseBody::Xml(s) => {
                Some(s.to_owned())
            }
            ResponseBody::Json(v) => Some(v.to_string()),
            ResponseBody::Empty | ResponseBody::Binary(_) => None,
        }
    }
}
