//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use mime_guess::mime;
use std::path::Path;

/// Get Content-Type for a file path
///
/// Textual types carry an explicit UTF-8 charset; unknown extensions map to
/// `application/octet-stream`.
pub fn get_content_type(path: &Path) -> String {
    let guess = mime_guess::from_path(path).first_or_octet_stream();
    if needs_charset(&guess) {
        format!("{guess}; charset=utf-8")
    } else {
        guess.to_string()
    }
}

fn needs_charset(m: &mime::Mime) -> bool {
    if m.get_param(mime::CHARSET).is_some() {
        return false;
    }
    m.type_() == mime::TEXT || m.subtype() == mime::JAVASCRIPT || m.subtype() == mime::JSON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(
            get_content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(get_content_type(Path::new("style.css")), "text/css; charset=utf-8");
        assert_eq!(
            get_content_type(Path::new("data.json")),
            "application/json; charset=utf-8"
        );
        assert_eq!(get_content_type(Path::new("logo.png")), "image/png");
        assert_eq!(get_content_type(Path::new("clip.mp4")), "video/mp4");
    }

    #[test]
    fn test_javascript_has_charset() {
        let ct = get_content_type(Path::new("app.js"));
        assert!(ct.contains("javascript"), "got {ct}");
        assert!(ct.ends_with("; charset=utf-8"), "got {ct}");
    }

    #[test]
    fn test_case_insensitive_extension() {
        assert_eq!(
            get_content_type(Path::new("INDEX.HTML")),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(
            get_content_type(Path::new("blob.notarealextension")),
            "application/octet-stream"
        );
        assert_eq!(get_content_type(Path::new("Makefile")), "application/octet-stream");
    }
}
