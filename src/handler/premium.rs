//! Premium endpoint fixtures
//!
//! The two paywalled routes return fixed analytics payloads plus a fresh
//! RFC 3339 timestamp. The data is illustrative; there is no backing
//! computation.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::json;

use super::router::RequestContext;
use crate::http;

pub fn serve(ctx: &RequestContext<'_>, path: &str) -> Response<Full<Bytes>> {
    let payload = match path {
        "/premium-insights" => premium_insights_payload(),
        "/advanced-query" => advanced_query_payload(),
        _ => return http::build_404_response(),
    };
    let response = http::build_json_response(200, &payload);
    if ctx.access_log {
        let len = response
            .headers()
            .get("Content-Length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        crate::logger::log_response(len);
    }
    response
}

pub fn premium_insights_payload() -> serde_json::Value {
    json!({
        "success": true,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "data": {
            "market_sentiment": "bullish",
            "confidence_score": 0.87,
            "signals": [
                { "asset": "NEAR", "signal": "buy", "strength": 0.82 },
                { "asset": "ETH", "signal": "hold", "strength": 0.64 },
                { "asset": "BTC", "signal": "buy", "strength": 0.71 }
            ],
            "summary": "Aggregated market insights across tracked assets."
        }
    })
}

pub fn advanced_query_payload() -> serde_json::Value {
    json!({
        "success": true,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "premium_data_version": "v2.1.0",
        "data": {
            "query_capabilities": [
                "historical-trends",
                "cross-chain-metrics",
                "developer-activity"
            ],
            "results": {
                "records_scanned": 18_423,
                "matches": 512,
                "top_match": "bitte-protocol/docs"
            },
            "summary": "Advanced analytics query against the premium dataset."
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_payload_contract() {
        let payload = premium_insights_payload();
        assert_eq!(payload["success"], true);
        let timestamp = payload["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(payload.get("premium_data_version").is_none());
    }

    #[test]
    fn test_advanced_query_payload_contract() {
        let payload = advanced_query_payload();
        assert_eq!(payload["success"], true);
        assert_eq!(payload["premium_data_version"], "v2.1.0");
        let timestamp = payload["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
