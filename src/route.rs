//! Path based view selection

use crate::state::View;
use thiserror::Error;

/// Path shown when nothing else is requested
pub const DEFAULT_ROUTE: &str = "/";

/// Route resolution failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page is mounted at `{0}`")]
    Unknown(String),
}

/// Resolve a page path to the view it renders.
///
/// `/` and `/version1` select the first variant, `/version2` the second.
/// A single trailing slash is ignored.
pub fn resolve(path: &str) -> Result<View, RouteError> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };

    match trimmed {
        "/" | "/version1" => Ok(View::Version1),
        "/version2" => Ok(View::Version2),
        _ => Err(RouteError::Unknown(path.to_string())),
    }
}

/// Resolve a path, falling back to the empty page shell for unknown routes
pub fn resolve_or_blank(path: &str) -> View {
    match resolve(path) {
        Ok(view) => view,
        Err(err) => {
            tracing::warn!("{err}");
            View::NotFound
        }
    }
}
