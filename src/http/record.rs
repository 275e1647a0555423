//! Request record model.
//!
//! # Responsibilities
//! - Hold the parsed details of one inbound request
//! - Serialize to the response document shape
//! - Render the human-readable console block
//!
//! # Design Decisions
//! - One record per request, dropped once the response is written
//! - Query values keep the single-string / array duality: a name seen
//!   exactly once serializes as a plain string, never a one-element array
//! - Maps preserve wire order (serde_json `preserve_order`)

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Value of a query parameter: a single string, or every occurrence in
/// order when the name repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl From<ParamValue> for Value {
    fn from(param: ParamValue) -> Self {
        match param {
            ParamValue::Single(v) => Value::String(v),
            ParamValue::Many(vs) => Value::Array(vs.into_iter().map(Value::String).collect()),
        }
    }
}

/// Parsed details of one inbound HTTP request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestDetails {
    /// HTTP verb, e.g. `"GET"`.
    pub method: String,

    /// Request path with the query string stripped.
    pub endpoint: String,

    /// Query parameters, name → string or ordered array of strings.
    pub query_params: Map<String, Value>,

    /// Request headers, lower-cased name → value (last occurrence wins).
    pub headers: Map<String, Value>,

    /// Request payload decoded as UTF-8 text, `""` when absent.
    pub body: String,
}

impl RequestDetails {
    /// Path with the query parameters re-serialized as `key=value` pairs.
    ///
    /// Display only. Array values render as their JSON form, so this
    /// string is lossy for repeated keys; the response document is not.
    pub fn endpoint_display(&self) -> String {
        if self.query_params.is_empty() {
            return self.endpoint.clone();
        }

        let query = self
            .query_params
            .iter()
            .map(|(name, value)| match value {
                Value::String(s) => format!("{}={}", name, s),
                other => format!("{}={}", name, other),
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.endpoint, query)
    }

    /// Headers as one `name: value` line each.
    pub fn headers_display(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| match value {
                Value::String(s) => format!("{}: {}", name, s),
                other => format!("{}: {}", name, other),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for RequestDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Method]: {}\n[Endpoint]: {}\n[Headers]: {}\n[Body]: {}",
            self.method,
            self.endpoint_display(),
            self.headers_display(),
            self.body
        )
    }
}

/// Response document: the record nested under `request_details`.
#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    pub request_details: RequestDetails,
}
