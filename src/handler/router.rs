//! Request routing dispatch module
//!
//! Exact-path route table; the HTTP method is not checked.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::config::AppState;
use crate::handler::translate::handle_translate;
use crate::http;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Handlers reachable through the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Translate,
}

/// Organization IDs and billing reference numbers share one handler
pub const ROUTES: &[(&str, Route)] = &[
    ("/internal/orgIds", Route::Translate),
    ("/internal/ebsNumbers", Route::Translate),
];

/// Find the handler registered for an exact path
pub fn match_route(path: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, route)| *route)
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let response = match match_route(req.uri().path()) {
        Some(Route::Translate) => handle_translate(req, peer_addr, state).await,
        None => http::build_404_response(),
    };
    Ok(response)
}
