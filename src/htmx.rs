//! Partial-render dispatch for htmx in-place navigation.
//!
//! An htmx navigation (`hx-get` + `hx-target="#main-content"`) only needs
//! the page's inner content; a regular browser load needs the full
//! document. Handlers produce the content once and let [`dispatch`] decide
//! whether to wrap it in the layout shell.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{HeaderMap, HeaderValue, VARY};
use axum::http::request::Parts;
use axum::response::Response;

use crate::html::Node;

/// Header htmx sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";
/// Header htmx sets when restoring history after a cache miss.
pub const HX_HISTORY_RESTORE_REQUEST: &str = "hx-history-restore-request";
/// ID of the element targeted by the request, if any.
pub const HX_TARGET: &str = "hx-target";

/// Navigation marker extracted from an inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmxRequest {
    /// The request wants the content fragment only.
    pub partial: bool,
    pub target: Option<String>,
}

impl HtmxRequest {
    /// Marker for a full page load.
    pub fn full_page() -> Self {
        Self::default()
    }

    /// Marker for an in-place navigation fetch.
    pub fn partial() -> Self {
        Self {
            partial: true,
            target: None,
        }
    }

    /// History restores are sent by htmx but expect a whole document, so
    /// they are treated as full page loads.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let partial = header_is_true(headers, HX_REQUEST)
            && !header_is_true(headers, HX_HISTORY_RESTORE_REQUEST);
        let target = headers
            .get(HX_TARGET)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self { partial, target }
    }
}

fn header_is_true(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

#[async_trait]
impl<S> FromRequestParts<S> for HtmxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Check whether the request headers describe an in-place navigation.
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    HtmxRequest::from_headers(headers).partial
}

/// Produce the page content and wrap it unless the request is partial.
///
/// `content` runs exactly once on either branch.
pub fn dispatch<C, W>(request: &HtmxRequest, content: C, wrap: W) -> Node
where
    C: FnOnce() -> Node,
    W: FnOnce(Node) -> Node,
{
    let content = content();
    if request.partial {
        tracing::debug!(target_id = ?request.target, "Rendering content fragment");
        content
    } else {
        tracing::debug!("Rendering full page");
        wrap(content)
    }
}

/// Fallible form of [`dispatch`]: a producer error is returned untouched
/// and `wrap` is not called.
pub fn try_dispatch<C, W, E>(request: &HtmxRequest, content: C, wrap: W) -> Result<Node, E>
where
    C: FnOnce() -> Result<Node, E>,
    W: FnOnce(Node) -> Node,
{
    let content = content()?;
    Ok(dispatch(request, || content, wrap))
}

/// Response mapper that marks every response as varying on `HX-Request`.
///
/// The same URL serves both a fragment and a full document, so caches must
/// key on the header.
pub async fn vary_on_hx_request(mut response: Response) -> Response {
    response
        .headers_mut()
        .append(VARY, HeaderValue::from_static("HX-Request"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{div, span};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_from_headers_detects_htmx() {
        let req = HtmxRequest::from_headers(&headers(&[
            ("hx-request", "true"),
            ("hx-target", "main-content"),
        ]));
        assert!(req.partial);
        assert_eq!(req.target.as_deref(), Some("main-content"));
    }

    #[test]
    fn test_from_headers_plain_request() {
        let req = HtmxRequest::from_headers(&HeaderMap::new());
        assert_eq!(req, HtmxRequest::full_page());
        assert!(!is_htmx_request(&HeaderMap::new()));
    }

    #[test]
    fn test_from_headers_value_must_be_true() {
        assert!(is_htmx_request(&headers(&[("hx-request", " TRUE ")])));
        assert!(!is_htmx_request(&headers(&[("hx-request", "false")])));
        assert!(!is_htmx_request(&headers(&[("hx-request", "")])));
    }

    #[test]
    fn test_history_restore_is_full_page() {
        let map = headers(&[
            ("hx-request", "true"),
            ("hx-history-restore-request", "true"),
        ]);
        assert!(!is_htmx_request(&map));
    }

    #[test]
    fn test_dispatch_branches() {
        let content = || -> Node { span().text("A").into() };
        let wrap = |c: Node| -> Node { div().child(c).into() };

        assert_eq!(
            dispatch(&HtmxRequest::partial(), content, wrap),
            content()
        );
        assert_eq!(
            dispatch(&HtmxRequest::full_page(), content, wrap),
            wrap(content())
        );
    }

    #[test]
    fn test_try_dispatch_skips_wrap_on_error() {
        let mut wrapped = false;
        let result: Result<Node, &str> =
            try_dispatch(&HtmxRequest::full_page(), || Err("boom"), |c| {
                wrapped = true;
                c
            });
        assert_eq!(result, Err("boom"));
        assert!(!wrapped);
    }

    #[tokio::test]
    async fn test_vary_header_appended() {
        let response = Response::new(axum::body::Body::empty());
        let response = vary_on_hx_request(response).await;
        assert_eq!(response.headers().get(VARY).unwrap(), "HX-Request");
    }
}
