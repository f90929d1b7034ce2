//! Translation endpoint
//!
//! Reads the whole body as a JSON array of identifiers and answers with a
//! JSON object mapping each identifier to a random decimal value. Any failure
//! is answered with `500` and `{"error": "..."}`; the process keeps serving.

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::net::SocketAddr;

use crate::config::AppState;
use crate::error::TranslateError;
use crate::http;
use crate::logger;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub async fn handle_translate<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    match translate_request(req.into_body(), state).await {
        Ok(body) => {
            logger::log_translation_sent(&peer_addr);
            http::build_json_response(StatusCode::OK, body)
        }
        Err(e) => {
            let message = e.to_string();
            logger::log_error(&message);
            http::build_500_response(&message)
        }
    }
}

async fn translate_request<B>(body: B, state: &AppState) -> Result<String, TranslateError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let limit = state.config.translator.max_body_size;
    let bytes = Limited::new(body, usize::try_from(limit).unwrap_or(usize::MAX))
        .collect()
        .await
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                TranslateError::BodyTooLarge { limit }
            } else {
                TranslateError::BodyRead(e.to_string())
            }
        })?
        .to_bytes();

    state.translator.translate_body(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use hyper::body::Frame;
    use serde_json::Value;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};

    /// Body whose transport fails before any data arrives
    struct ResetBody;

    impl Body for ResetBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            Poll::Ready(Some(Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "peer reset",
            ))))
        }
    }

    fn state_with(max_body_size: u64, max_identifiers: Option<usize>) -> Arc<AppState> {
        let mut cfg = Config::load_from("does-not-exist/translator", None, None).unwrap();
        cfg.translator.max_body_size = max_body_size;
        cfg.translator.max_identifiers = max_identifiers;
        Arc::new(AppState::new(&cfg))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    async fn call(state: Arc<AppState>, body: &'static str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/internal/orgIds")
            .body(Full::new(Bytes::from_static(body.as_bytes())))
            .unwrap();
        let resp = handle_translate(req, peer(), &state).await;
        let status = resp.status();
        assert_eq!(resp.headers()["content-type"], "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_translates_each_identifier() {
        let (status, body) = call(state_with(1024, None), r#"["org-1","org-2"]"#).await;
        assert_eq!(status, StatusCode::OK);

        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 2);
        for key in ["org-1", "org-2"] {
            let value = map[key].as_str().unwrap();
            assert!(value.parse::<u64>().is_ok(), "{value}");
        }
    }

    #[tokio::test]
    async fn test_empty_array() {
        let (status, body) = call(state_with(1024, None), "[]").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_500() {
        for input in ["not json", r#"{"a":1}"#, "[1,2,3]", ""] {
            let (status, body) = call(state_with(1024, None), input).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{input}");
            assert!(body["error"].is_string(), "{input}");
        }
    }

    #[tokio::test]
    async fn test_body_limit() {
        let (status, body) = call(state_with(8, None), r#"["org-1","org-2"]"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Request body exceeds the limit of 8 bytes");
    }

    #[tokio::test]
    async fn test_identifier_limit() {
        let (status, body) = call(state_with(1024, Some(1)), r#"["a","b"]"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Too many identifiers"));
    }

    #[tokio::test]
    async fn test_failure_does_not_poison_state() {
        let state = state_with(1024, None);
        let (status, _) = call(Arc::clone(&state), "not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = call(state, r#"["org-1"]"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["org-1"].is_string());
    }

    #[tokio::test]
    async fn test_body_read_failure_is_500() {
        let state = state_with(1024, None);
        let req = Request::builder()
            .method("POST")
            .uri("/internal/ebsNumbers")
            .body(ResetBody)
            .unwrap();

        let resp = handle_translate(req, peer(), &state).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()["content-type"], "application/json");

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Error reading the request body: peer reset");
    }
}
