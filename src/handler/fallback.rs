//! Fallback responder
//!
//! Terminal step: answers every request no file was found for.

use crate::config::FallbackConfig;
use crate::handler::router::RequestContext;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

pub fn respond(ctx: &RequestContext<'_>, fallback: &FallbackConfig) -> Response<Full<Bytes>> {
    http::build_text_response(&fallback.body, &fallback.content_type, ctx.is_head)
}
