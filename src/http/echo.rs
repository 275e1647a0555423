//! Echo request handler.
//!
//! # Responsibilities
//! - Parse the inbound request into a [`RequestDetails`] record
//! - Log one human-readable block per request
//! - Answer 200 with the pretty-printed JSON document
//!
//! # Design Decisions
//! - One handler serves every method on every path; there is no routing
//! - A name occurring once in the query maps to a plain string, a
//!   repeated name to the ordered array of all its values
//! - Repeated request headers keep the last occurrence
//! - Non-UTF-8 body bytes are decoded lossily; a malformed body can
//!   never take down more than its own response

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::http::record::{EchoResponse, ParamValue, RequestDetails};

/// Handle any inbound request and echo its details back as JSON.
pub async fn echo_handler(request: Request<Body>) -> impl IntoResponse {
    let (parts, body) = request.into_parts();

    let endpoint = parts.uri.path().to_string();
    let query_params = parse_query(parts.uri.query().unwrap_or(""));
    let headers = collect_headers(&parts.headers);

    // hyper frames the body by Content-Length; absent or zero yields
    // no bytes. A mid-body transport error degrades to an empty body.
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            Bytes::new()
        });
    let body = String::from_utf8_lossy(&bytes).into_owned();

    let details = RequestDetails {
        method: parts.method.to_string(),
        endpoint,
        query_params,
        headers,
        body,
    };

    let separator = "=".repeat(80);
    tracing::info!(
        "Received request: \n{}\n{}\n{}",
        separator,
        details,
        separator
    );

    let document = EchoResponse {
        request_details: details,
    };
    let json = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize response document");
        "{}".to_string()
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
}

/// Parse a raw query string into the name → value(s) map.
///
/// `+` and `%XX` are decoded. Names with a blank value (`?a=` or a bare
/// `?a`) are omitted, matching form-decoding conventions for diagnostic
/// output.
pub(crate) fn parse_query(query: &str) -> Map<String, Value> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let (name, value) = (name.into_owned(), value.into_owned());
        match grouped.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => grouped.push((name, vec![value])),
        }
    }

    grouped
        .into_iter()
        .map(|(name, mut values)| {
            let param = if values.len() == 1 {
                ParamValue::Single(values.remove(0))
            } else {
                ParamValue::Many(values)
            };
            (name, param.into())
        })
        .collect()
}

/// Flatten request headers into a lower-cased name → value map.
///
/// Header names arrive lower-cased from the `http` crate. A header sent
/// multiple times keeps its last value; non-UTF-8 header bytes are
/// decoded lossily.
pub(crate) fn collect_headers(headers: &HeaderMap) -> Map<String, Value> {
    let mut collected = Map::new();
    for (name, value) in headers.iter() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected.insert(name.as_str().to_string(), Value::String(value));
    }
    collected
}
