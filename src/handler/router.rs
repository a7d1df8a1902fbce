//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, literal
//! path matching and dispatch to the asset, manifest and premium
//! handlers. Paths are disjoint literals, so match order carries no
//! semantics; anything unmatched is a 404.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Method, Request, Response};

use super::{manifest, premium, static_files};
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::payment::Admission;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type because no handler consumes a request
/// body; tests drive it with `Full<Bytes>` requests.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, path);
    }

    // GET, HEAD, POST and OPTIONS are accepted at the transport layer
    // and share the handler table; everything else is rejected.
    match *method {
        Method::GET | Method::HEAD | Method::POST | Method::OPTIONS => {}
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return Ok(http::build_405_response());
        }
    }

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let ctx = RequestContext {
        path,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        access_log,
    };

    let mut response = route_request(&ctx, req.headers(), &state).await;
    if is_head {
        *response.body_mut() = Full::new(Bytes::new());
    }
    Ok(response)
}

/// Dispatch on the literal path
async fn route_request(
    ctx: &RequestContext<'_>,
    headers: &HeaderMap,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match ctx.path {
        "/" => static_files::serve_asset(ctx, &state.assets.page).await,
        "/favicon.ico" => static_files::serve_asset(ctx, &state.assets.favicon).await,
        "/logo.png" => static_files::serve_asset(ctx, &state.assets.logo).await,
        "/.well-known/ai-plugin.json" => manifest::serve(ctx, state),
        path => serve_gated_route(ctx, headers, state, path).await,
    }
}

/// Premium routes exist only in the payment variant; otherwise every
/// remaining path is a 404.
async fn serve_gated_route(
    ctx: &RequestContext<'_>,
    headers: &HeaderMap,
    state: &Arc<AppState>,
    path: &str,
) -> Response<Full<Bytes>> {
    let (Some(rule), Some(gate)) = (state.rules.get(path), state.gate.as_ref()) else {
        return http::build_404_response();
    };

    match gate.admit(headers, rule).await {
        Admission::Allow => premium::serve(ctx, rule.path),
        Admission::Challenge(response) => response,
    }
}
