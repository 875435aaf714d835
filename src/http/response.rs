//! HTTP response building module
//!
//! Builders for the two responses the responder produces. Both are always
//! 200; `HEAD` keeps the headers and drops the body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};

/// Build 200 response carrying file content
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_ok_response(data, content_type, is_head, "file")
}

/// Build 200 plain response with a fixed text body
pub fn build_text_response(
    text: &str,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_ok_response(Bytes::from(text.to_owned()), content_type, is_head, "text")
}

fn build_ok_response(
    data: Bytes,
    content_type: &str,
    is_head: bool,
    kind: &str,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_LENGTH, content_length);

    // An unusable content type costs the header, never the body
    match HeaderValue::from_str(content_type) {
        Ok(value) => builder = builder.header(CONTENT_TYPE, value),
        Err(e) => crate::logger::log_error(&format!(
            "Invalid content type {content_type:?} for {kind} response: {e}"
        )),
    }

    builder.body(Full::new(body.clone())).unwrap_or_else(|e| {
        log_build_error(kind, &e);
        Response::new(Full::new(body))
    })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_text_response() {
        let resp = build_text_response("handled", "text/plain; charset=utf-8", false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "7");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"handled");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_file_response(Bytes::from_static(b"<p>hi</p>"), "text/html", true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "9");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_content_type_keeps_body() {
        let resp = build_text_response("handled", "bad\nvalue", false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(resp.headers()[CONTENT_LENGTH], "7");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"handled");
    }
}
