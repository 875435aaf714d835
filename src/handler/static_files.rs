//! Static file serving module
//!
//! Maps a request path onto a regular file under the asset root. Anything
//! that does not resolve, for whatever reason, is left to the next step.

use crate::handler::router::RequestContext;
use crate::handler::Flow;
use crate::http;
use crate::logger;
use hyper::body::Bytes;
use hyper::Method;
use std::path::{Path, PathBuf};
use tokio::fs;

static ROOT_UNAVAILABLE: logger::WarnOnce = logger::WarnOnce::new();

/// Serve the file named by the request path, if there is one
pub async fn serve(ctx: &RequestContext<'_>, root: &Path, index_files: &[String]) -> Flow {
    if !matches!(*ctx.method, Method::GET | Method::HEAD) {
        return Flow::Next;
    }

    let Some(file_path) = resolve_file(root, ctx.path, index_files).await else {
        return Flow::Next;
    };

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return Flow::Next;
        }
    };

    let content_type = http::get_content_type(&file_path);
    Flow::Respond(http::build_file_response(
        Bytes::from(content),
        &content_type,
        ctx.is_head,
    ))
}

/// Resolve a request path to a regular file inside `root`
pub async fn resolve_file(root: &Path, request_path: &str, index_files: &[String]) -> Option<PathBuf> {
    let (relative, trailing_slash) = normalize_request_path(request_path)?;

    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning_once(
                &ROOT_UNAVAILABLE,
                &format!(
                    "Asset root not found or inaccessible '{}': {e}. Requests fall through to the fallback",
                    root.display()
                ),
            );
            return None;
        }
    };

    let mut file_path = root_canonical.join(relative);

    // Not found is the common case and goes to the fallback silently
    let metadata = fs::metadata(&file_path).await.ok()?;
    if metadata.is_dir() {
        file_path = find_index_file(&file_path, index_files).await?;
    } else if trailing_slash || !metadata.is_file() {
        return None;
    }

    // Symlinks may point anywhere; only serve what really lives under the root
    let file_canonical = fs::canonicalize(&file_path).await.ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path escapes asset root: {request_path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    Some(file_path)
}

/// Percent-decode and lexically normalize a URI path
///
/// Returns the path relative to the root and whether the request ended in
/// `/`. `None` when the path cannot name anything servable under the root:
/// bad encoding, embedded NUL, a `..` climbing above the root, or a hidden
/// (dot-prefixed) segment such as `.env` or `.git`.
pub fn normalize_request_path(request_path: &str) -> Option<(PathBuf, bool)> {
    let decoded = urlencoding::decode(request_path).ok()?;
    if decoded.contains('\0') {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s if s.starts_with('.') => return None,
            s => {
                #[cfg(windows)]
                if s.contains(['\\', ':']) {
                    return None;
                }
                segments.push(s);
            }
        }
    }

    Some((segments.iter().collect(), decoded.ends_with('/')))
}

async fn find_index_file(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    for name in index_files {
        let candidate = dir.join(name);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Some(candidate);
        }
    }
    None
}
