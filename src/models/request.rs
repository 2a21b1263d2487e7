//! # HTTP Request Model
//!
//! Value types describing an outbound HTTP request: method, URL, ordered
//! header and query-parameter lists, the tagged body encodings, and an
//! optional timeout. These are plain data; constructing and serializing
//! them is the whole contract. Transports consume a finished
//! [`HttpRequest`]; the in-progress editing shape lives in
//! [`crate::session::Draft`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An ordered key-value string pair, used identically for header rows and
/// query-parameter rows. Duplicate keys are allowed; the list owning the
/// pair defines its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The placeholder editing row: both sides empty.
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// True when both key and value are empty.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

/// HTTP request method. The full set supported by the request editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl Method {
    /// All supported methods, in the order a method selector displays them.
    pub const ALL: [Method; 7] = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::HEAD,
        Method::OPTIONS,
    ];

    /// Canonical wire token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parse a method token case-insensitively. Anything outside the
    /// supported enumeration is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "PATCH" => Ok(Method::PATCH),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            _ => Err(Error::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// Declared content kind of a raw request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawBodyType {
    Text,
    Json,
    Xml,
    Html,
    Javascript,
}

impl RawBodyType {
    /// MIME type a transport should declare for this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            RawBodyType::Text => "text/plain",
            RawBodyType::Json => "application/json",
            RawBodyType::Xml => "application/xml",
            RawBodyType::Html => "text/html",
            RawBodyType::Javascript => "application/javascript",
        }
    }
}

impl fmt::Display for RawBodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RawBodyType::Text => "text",
            RawBodyType::Json => "json",
            RawBodyType::Xml => "xml",
            RawBodyType::Html => "html",
            RawBodyType::Javascript => "javascript",
        };
        f.write_str(token)
    }
}

impl FromStr for RawBodyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(RawBodyType::Text),
            "json" => Ok(RawBodyType::Json),
            "xml" => Ok(RawBodyType::Xml),
            "html" => Ok(RawBodyType::Html),
            "javascript" => Ok(RawBodyType::Javascript),
            _ => Err(Error::InvalidBodyKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Raw body content with its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBody {
    pub content: String,
    pub content_type: RawBodyType,
}

impl RawBody {
    pub fn new(content: impl Into<String>, content_type: RawBodyType) -> Self {
        Self {
            content: content.into(),
            content_type,
        }
    }
}

/// One entry of a multipart form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDataItem {
    pub key: String,
    pub value: FormDataValue,
}

/// Value side of a form-data entry: inline text or a file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormDataValue {
    Text(String),
    File {
        path: String,
        content_type: Option<String>,
    },
}

/// Request body encodings, discriminated by variant tag. Serialized with
/// serde's externally tagged representation, so consumers always see an
/// explicit discriminant and never guess from shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestBody {
    /// Raw content with a declared kind.
    Raw(RawBody),
    /// Multipart form entries.
    FormData(Vec<FormDataItem>),
    /// `application/x-www-form-urlencoded` pairs.
    UrlEncoded(Vec<KeyValuePair>),
    /// Opaque payload referenced by file path.
    Binary(String),
}

/// A fully specified HTTP request, ready for a transport.
///
/// Header and parameter lists preserve insertion order, which is both the
/// display order and the order a wire encoder emits them in. Duplicate
/// keys are legal; deduplication, if any, is the wire encoder's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<KeyValuePair>,
    pub params: Vec<KeyValuePair>,
    pub body: Option<RequestBody>,
    /// Timeout in seconds. `None` means no timeout.
    pub timeout: Option<u64>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(KeyValuePair::new(key, value));
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(KeyValuePair::new(key, value));
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_should_parse_case_insensitively() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::GET);
        assert_eq!("Post".parse::<Method>().unwrap(), Method::POST);
        assert_eq!("OPTIONS".parse::<Method>().unwrap(), Method::OPTIONS);
    }

    #[test]
    fn method_should_reject_unknown_token() {
        let err = "TRACE".parse::<Method>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMethod {
                method: "TRACE".to_string()
            }
        );
    }

    #[test]
    fn method_all_should_cover_every_variant() {
        assert_eq!(Method::ALL.len(), 7);
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn raw_body_type_should_map_to_mime_types() {
        assert_eq!(RawBodyType::Text.content_type(), "text/plain");
        assert_eq!(RawBodyType::Json.content_type(), "application/json");
        assert_eq!(RawBodyType::Xml.content_type(), "application/xml");
        assert_eq!(RawBodyType::Html.content_type(), "text/html");
        assert_eq!(
            RawBodyType::Javascript.content_type(),
            "application/javascript"
        );
    }

    #[test]
    fn raw_body_type_should_reject_unknown_kind() {
        let err = "yaml".parse::<RawBodyType>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBodyKind {
                kind: "yaml".to_string()
            }
        );
    }

    #[test]
    fn key_value_pair_should_report_blankness() {
        assert!(KeyValuePair::blank().is_blank());
        assert!(!KeyValuePair::new("Accept", "").is_blank());
        assert!(!KeyValuePair::new("", "value").is_blank());
    }

    #[test]
    fn request_should_build_with_fluent_helpers() {
        let request = HttpRequest::new(Method::POST, "https://api.example.com/users")
            .with_header("Content-Type", "application/json")
            .with_param("page", "2")
            .with_body(RequestBody::Raw(RawBody::new(
                "{\"name\":\"test\"}",
                RawBodyType::Json,
            )))
            .with_timeout(30);

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.example.com/users");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.params[0], KeyValuePair::new("page", "2"));
        assert_eq!(request.timeout, Some(30));
        assert!(matches!(request.body, Some(RequestBody::Raw(_))));
    }

    #[test]
    fn headers_should_preserve_order_and_duplicates() {
        let request = HttpRequest::new(Method::GET, "https://example.com")
            .with_header("Accept", "text/html")
            .with_header("Cookie", "a=1")
            .with_header("Cookie", "b=2");

        let keys: Vec<&str> = request.headers.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["Accept", "Cookie", "Cookie"]);
        assert_eq!(request.headers[2].value, "b=2");
    }

    #[test]
    fn request_body_should_serialize_with_variant_tag() {
        let raw = RequestBody::Raw(RawBody::new("hello", RawBodyType::Text));
        assert_eq!(
            serde_json::to_value(&raw).unwrap(),
            json!({ "Raw": { "content": "hello", "content_type": "Text" } })
        );

        let encoded = RequestBody::UrlEncoded(vec![KeyValuePair::new("q", "rust")]);
        assert_eq!(
            serde_json::to_value(&encoded).unwrap(),
            json!({ "UrlEncoded": [{ "key": "q", "value": "rust" }] })
        );

        let binary = RequestBody::Binary("/tmp/payload.bin".to_string());
        assert_eq!(
            serde_json::to_value(&binary).unwrap(),
            json!({ "Binary": "/tmp/payload.bin" })
        );
    }

    #[test]
    fn request_body_should_reject_unknown_variant_tag() {
        let result: Result<RequestBody, _> =
            serde_json::from_value(json!({ "Csv": "a,b,c" }));
        assert!(result.is_err());
    }

    #[test]
    fn form_data_value_should_round_trip_file_references() {
        let value = FormDataValue::File {
            path: "/tmp/avatar.png".to_string(),
            content_type: Some("image/png".to_string()),
        };
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: FormDataValue = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}
