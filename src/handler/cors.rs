//! Cross-origin policy
//!
//! Computes the CORS headers for a request. The step only annotates; it never
//! answers a request on its own, preflights included.

use crate::config::CorsConfig;
use crate::handler::router::RequestContext;
use crate::logger;
use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS,
    ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, VARY,
};
use hyper::Method;

/// Write the CORS headers for `ctx` into `headers`
pub fn annotate(ctx: &RequestContext<'_>, cors: &CorsConfig, headers: &mut HeaderMap) {
    insert(headers, ACCESS_CONTROL_ALLOW_ORIGIN, &cors.allow_origin);
    if cors.allow_origin != "*" {
        headers.append(VARY, HeaderValue::from_static("Origin"));
    }
    if let Some(expose) = &cors.expose_headers {
        insert(headers, ACCESS_CONTROL_EXPOSE_HEADERS, expose);
    }

    if !is_preflight(ctx) {
        return;
    }

    insert(headers, ACCESS_CONTROL_ALLOW_METHODS, &cors.allow_methods);
    match &cors.allow_headers {
        Some(allowed) => insert(headers, ACCESS_CONTROL_ALLOW_HEADERS, allowed),
        None => {
            if let Some(requested) = ctx.headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
                headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            }
            headers.append(
                VARY,
                HeaderValue::from_static("Access-Control-Request-Headers"),
            );
        }
    }
    if let Some(max_age) = cors.max_age {
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from(max_age));
    }
}

/// A preflight is an `OPTIONS` request announcing the method it intends to use
fn is_preflight(ctx: &RequestContext<'_>) -> bool {
    *ctx.method == Method::OPTIONS && ctx.headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(v) => {
            headers.insert(name, v);
        }
        Err(_) => logger::log_warning(&format!("Invalid CORS value for {name}: {value:?}")),
    }
}
