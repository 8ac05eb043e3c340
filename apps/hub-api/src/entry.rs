//! Entry adapter between the HTTP listener and the application
//!
//! The application routes paths relative to the mount root. The adapter
//! strips the mount root, redirects the bare root to the docs page and
//! passes anything outside the mount root through unchanged.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::{debug, warn};

use crate::app::Application;

/// Where a request goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// Answer with a 302 to this location
    Redirect(String),
    /// Hand this path and query to the application
    Dispatch(String),
}

#[derive(Debug, Clone)]
pub struct EntryAdapter {
    mount_root: String,
}

impl EntryAdapter {
    /// `mount_root` is expected normalized: leading slash, no trailing slash,
    /// or empty
    pub fn new(mount_root: impl Into<String>) -> Self {
        Self {
            mount_root: mount_root.into(),
        }
    }

    pub fn mount_root(&self) -> &str {
        &self.mount_root
    }

    pub fn route(&self, path_and_query: &str) -> Routed {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };

        if !self.mount_root.is_empty()
            && (path == self.mount_root || path.strip_prefix(&self.mount_root) == Some("/"))
        {
            return Routed::Redirect(format!("{}/docs", self.mount_root));
        }

        match strip_mount(&self.mount_root, path) {
            Some(rest) => Routed::Dispatch(match query {
                Some(query) => format!("{rest}?{query}"),
                None => rest,
            }),
            None => Routed::Dispatch(path_and_query.to_string()),
        }
    }

    /// Router answering every request through this adapter
    pub fn into_router(self, app: Arc<Application>) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(Arc::new(EntryState { adapter: self, app }))
    }
}

/// Path relative to `mount`, or `None` when `path` is outside it
///
/// Matching is on segment boundaries: `/api` covers `/api/x` but not
/// `/apix`. An empty remainder becomes `/`.
pub fn strip_mount(mount: &str, path: &str) -> Option<String> {
    let rest = path.strip_prefix(mount)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}

struct EntryState {
    adapter: EntryAdapter,
    app: Arc<Application>,
}

async fn dispatch(State(state): State<Arc<EntryState>>, mut request: Request) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    match state.adapter.route(&path_and_query) {
        Routed::Redirect(location) => {
            debug!(from = %path_and_query, to = %location, "Redirecting to docs");
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Routed::Dispatch(target) => {
            match target.parse::<Uri>() {
                Ok(uri) => *request.uri_mut() = uri,
                Err(err) => {
                    warn!(target = %target, error = %err, "Rewritten URI is invalid");
                    return StatusCode::BAD_REQUEST.into_response();
                }
            }
            state.app.handle(request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn adapter() -> EntryAdapter {
        EntryAdapter::new("/api")
    }

    #[test]
    fn test_mount_root_redirects_to_docs() {
        assert_eq!(adapter().route("/api"), Routed::Redirect("/api/docs".into()));
        assert_eq!(adapter().route("/api/"), Routed::Redirect("/api/docs".into()));
        assert_eq!(
            adapter().route("/api?x=1"),
            Routed::Redirect("/api/docs".into())
        );
    }

    #[test]
    fn test_prefix_is_stripped() {
        assert_eq!(adapter().route("/api/foo/bar"), Routed::Dispatch("/foo/bar".into()));
        assert_eq!(
            adapter().route("/api/employees?status=ACTIVE"),
            Routed::Dispatch("/employees?status=ACTIVE".into())
        );
    }

    #[test]
    fn test_paths_outside_mount_pass_through() {
        assert_eq!(adapter().route("/other"), Routed::Dispatch("/other".into()));
        assert_eq!(adapter().route("/apifoo"), Routed::Dispatch("/apifoo".into()));
    }

    #[test]
    fn test_empty_mount_dispatches_everything() {
        let adapter = EntryAdapter::new("");
        assert_eq!(adapter.route("/"), Routed::Dispatch("/".into()));
        assert_eq!(adapter.route("/health?v=1"), Routed::Dispatch("/health?v=1".into()));
    }

    #[test]
    fn test_strip_mount() {
        assert_eq!(strip_mount("/api", "/api"), Some("/".into()));
        assert_eq!(strip_mount("/api", "/api/x"), Some("/x".into()));
        assert_eq!(strip_mount("/api", "/apix"), None);
        assert_eq!(strip_mount("", "/x"), Some("/x".into()));
    }

    #[tokio::test]
    async fn test_router_dispatches_and_redirects() {
        let app = Arc::new(Application::from_config(&AppConfig::default()).unwrap());
        let router = adapter().into_router(app);

        let response = router
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/api/docs");

        let response = router
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
