//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! request pipeline.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::get_content_type;
pub use response::{build_file_response, build_text_response};
