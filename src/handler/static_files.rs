//! Static asset serving module
//!
//! Serves the fixed asset table (landing page, favicon, logo). Files are
//! read from disk per request; a read failure maps to a 500 at the route
//! boundary and never unwinds the service.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::router::RequestContext;
use crate::assets::Asset;
use crate::http::{self, cache};
use crate::logger;

pub async fn serve_asset(ctx: &RequestContext<'_>, asset: &Asset) -> Response<Full<Bytes>> {
    let content = match asset.read().await {
        Ok(content) => content,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                asset.path.display()
            ));
            return http::build_500_response();
        }
    };

    let etag = cache::generate_etag(&content);
    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    if ctx.access_log {
        logger::log_response(content.len());
    }
    http::build_asset_response(&content, asset.content_type, &etag)
}
