//! Request handler module
//!
//! The responder pipeline: CORS annotation, static file resolution, then
//! the fallback text for anything left unresolved.

pub mod cors;
pub mod fallback;
pub mod router;
pub mod static_files;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

// Re-export main entry point
pub use router::handle_request;

/// Result of a pipeline step that may end the request
pub enum Flow {
    /// Not handled here, continue with the next step
    Next,
    /// Handled, send this response
    Respond(Response<Full<Bytes>>),
}
