use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::{debug, warn};

/// Public catalog origin
pub const DEFAULT_UPSTREAM: &str = "https://itunes.apple.com";

/// Path prefix rewritten to the upstream root
pub const CATALOG_PREFIX: &str = "/api/itunes";

pub struct ProxyState {
    pub client: reqwest::Client,
    /// Upstream origin without a trailing slash
    pub upstream: String,
}

impl ProxyState {
    pub fn new(client: reqwest::Client, upstream: &str) -> Self {
        Self {
            client,
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }
}

pub fn proxy_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/api/itunes/*path", get(forward_catalog))
        .route("/health", get(health))
        .with_state(state)
}

/// Rewrite a request URI under [`CATALOG_PREFIX`] to the matching upstream
/// URL, keeping the raw (still percent-encoded) path and query.
pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path = uri
        .path()
        .strip_prefix(CATALOG_PREFIX)
        .unwrap_or_else(|| uri.path());
    match uri.query() {
        Some(query) => format!("{upstream}{path}?{query}"),
        None => format!("{upstream}{path}"),
    }
}

fn bad_gateway(msg: &str) -> Response {
    (StatusCode::BAD_GATEWAY, msg.to_string()).into_response()
}

async fn forward_catalog(State(state): State<Arc<ProxyState>>, uri: Uri) -> Response {
    let url = upstream_url(&state.upstream, &uri);
    debug!("forwarding {uri} -> {url}");

    let upstream_resp = match state.client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            warn!("upstream request failed for {url}: {e}");
            return bad_gateway("catalog upstream unavailable");
        }
    };

    let status = upstream_resp.status();
    let content_type = upstream_resp.headers().get(header::CONTENT_TYPE).cloned();

    let body = match upstream_resp.bytes().await {
        Ok(body) => body,
        Err(e) => {
            warn!("failed to read upstream body for {url}: {e}");
            return bad_gateway("catalog upstream response interrupted");
        }
    };

    if !status.is_success() {
        warn!("upstream answered {status} for {url}");
    }

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    } else {
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    response
}

async fn health(State(state): State<Arc<ProxyState>>) -> Response {
    let body = serde_json::json!({
        "status": "ok",
        "upstream": state.upstream,
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body.to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Request;
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Upstream stand-in that records the URI of every request it gets
    async fn spawn_upstream(seen: Arc<Mutex<Vec<String>>>) -> String {
        let app = Router::new().fallback(move |uri: Uri| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(uri.to_string());
                if uri.path() == "/missing" {
                    return (StatusCode::NOT_FOUND, "nope").into_response();
                }
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
                    r#"{"resultCount":0,"results":[]}"#,
                )
                    .into_response()
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn router_for(upstream: &str) -> Router {
        proxy_router(Arc::new(ProxyState::new(reqwest::Client::new(), upstream)))
    }

    async fn send_get(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn upstream_url_rewrites_prefix_and_keeps_query() {
        let uri: Uri = "/api/itunes/search?term=jack%20johnson&entity=song,musicVideo&limit=12"
            .parse()
            .unwrap();
        assert_eq!(
            upstream_url("https://itunes.apple.com", &uri),
            "https://itunes.apple.com/search?term=jack%20johnson&entity=song,musicVideo&limit=12"
        );

        let uri: Uri = "/api/itunes/lookup".parse().unwrap();
        assert_eq!(
            upstream_url("http://localhost:9000", &uri),
            "http://localhost:9000/lookup"
        );
    }

    #[test]
    fn state_trims_trailing_slash() {
        let state = ProxyState::new(reqwest::Client::new(), "https://itunes.apple.com/");
        assert_eq!(state.upstream, "https://itunes.apple.com");
    }

    #[tokio::test]
    async fn forwards_path_query_and_content_type() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let upstream = spawn_upstream(seen.clone()).await;

        let response = send_get(
            router_for(&upstream),
            "/api/itunes/search?term=jack+johnson&entity=song,musicVideo&limit=12&attribute=artistTerm",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/javascript; charset=utf-8"
        );
        assert_eq!(body_string(response).await, r#"{"resultCount":0,"results":[]}"#);

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            ["/search?term=jack+johnson&entity=song,musicVideo&limit=12&attribute=artistTerm"]
        );
    }

    #[tokio::test]
    async fn upstream_status_is_passed_through() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let upstream = spawn_upstream(seen).await;

        let response = send_get(router_for(&upstream), "/api/itunes/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "nope");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let response = send_get(
            router_for(&format!("http://{addr}")),
            "/api/itunes/search?term=x",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn health_reports_upstream() {
        let response = send_get(router_for("https://itunes.apple.com"), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["upstream"], "https://itunes.apple.com");
    }

    #[tokio::test]
    async fn unknown_routes_are_not_forwarded() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let upstream = spawn_upstream(seen.clone()).await;

        let response = send_get(router_for(&upstream), "/api/other/search").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(seen.lock().unwrap().is_empty());
    }
}
