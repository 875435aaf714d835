//! Request pipeline module
//!
//! Entry point for HTTP request processing. Every request runs the same
//! fixed sequence: CORS annotation, static file lookup, fallback.

use crate::config::AppState;
use crate::handler::{cors, fallback, static_files, Flow};
use crate::logger::{self, AccessLogEntry, Outcome};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderName, REFERER, USER_AGENT};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub headers: &'a HeaderMap,
    pub is_head: bool,
}

impl<'a> RequestContext<'a> {
    pub fn from_parts(parts: &'a Parts) -> Self {
        Self {
            method: &parts.method,
            path: parts.uri.path(),
            headers: &parts.headers,
            is_head: parts.method == Method::HEAD,
        }
    }
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted. It is
/// dropped up front; the returned future only borrows the request head.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, _) = req.into_parts();
    let ctx = RequestContext::from_parts(&parts);

    // 1. CORS headers, held until a step produces the response
    let mut cors_headers = HeaderMap::new();
    cors::annotate(&ctx, &state.config.cors, &mut cors_headers);

    // 2. Static file, 3. fallback
    let (mut response, outcome) =
        match static_files::serve(&ctx, &state.root, &state.config.assets.index_files).await {
            Flow::Respond(resp) => (resp, Outcome::File),
            Flow::Next => (
                fallback::respond(&ctx, &state.config.fallback),
                Outcome::Fallback,
            ),
        };

    response.headers_mut().extend(cors_headers);

    if state.access_log {
        log_access(&parts, &response, outcome, peer_addr, started, &state);
    }

    Ok(response)
}

fn log_access(
    req: &Parts,
    response: &Response<Full<Bytes>>,
    outcome: Outcome,
    peer_addr: SocketAddr,
    started: Instant,
    state: &AppState,
) {
    let header = |name: HeaderName| {
        req.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method.to_string(),
        req.uri.path().to_string(),
    );
    entry.query = req.uri.query().map(ToString::to_string);
    entry.http_version = version_label(req.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry.outcome = outcome;

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
