//! Plugin manifest module
//!
//! Builds the `/.well-known/ai-plugin.json` document an AI orchestration
//! layer uses to discover the agent. The document is assembled fresh per
//! request from the immutable configuration; the `paths` section mirrors
//! the payment rule table and is purely descriptive.

use std::collections::BTreeMap;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;
use serde_json::json;

use super::router::RequestContext;
use crate::config::{AppState, Config};
use crate::http;
use crate::payment::PaymentRules;

const OPENAPI_VERSION: &str = "3.0.0";
const MANIFEST_TITLE: &str = "Bitte Docs Agent";
const MANIFEST_DESCRIPTION: &str = "Bitte Docs Agent Specification. https://docs.bitte.ai";
const MANIFEST_VERSION: &str = "1.0.0";

const ASSISTANT_NAME: &str = "Bitte Docs AI";
const ASSISTANT_DESCRIPTION: &str =
    "Bitte Protocol Knowledge Assistant. Ask anything about Bitte Protocol. https://docs.bitte.ai";
const ASSISTANT_INSTRUCTIONS: &str = "You are a helpful assistant that provides accurate information about Bitte protocol. You use the Bitte docs to answer questions, encouraging exploration, learning, and development with the Bitte protocol.  The Bitte docs are available at https://docs.bitte.ai.  Use the data-retrieval tool to fetch the most relevant information from the docs based on the user's query.  When responding, be concise, include links to relevant source material, and be adaptive to the user's domain knowledge.";

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub openapi: &'static str,
    pub info: Info,
    pub servers: Vec<Server>,
    #[serde(rename = "x-mb")]
    pub x_mb: XMb,
    pub paths: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct XMb {
    /// Omitted entirely when no account id is configured.
    #[serde(rename = "account-id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub assistant: Assistant,
}

#[derive(Debug, Serialize)]
pub struct Assistant {
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub tools: Vec<Tool>,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Assemble the manifest from configuration and the payment rule table.
pub fn build_manifest(config: &Config, rules: &PaymentRules) -> Manifest {
    let base_url = config.agent.base_url.trim_end_matches('/');

    let mut paths = BTreeMap::new();
    for rule in rules.iter() {
        paths.insert(
            rule.path.to_string(),
            json!({
                "get": {
                    "operationId": operation_id(rule.path),
                    "summary": rule.description,
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": { "application/json": {} }
                        }
                    }
                }
            }),
        );
    }

    Manifest {
        openapi: OPENAPI_VERSION,
        info: Info {
            title: MANIFEST_TITLE,
            description: MANIFEST_DESCRIPTION,
            version: MANIFEST_VERSION,
        },
        servers: vec![Server {
            url: base_url.to_string(),
        }],
        x_mb: XMb {
            account_id: config.agent.account_id.clone(),
            assistant: Assistant {
                name: ASSISTANT_NAME,
                description: ASSISTANT_DESCRIPTION,
                instructions: ASSISTANT_INSTRUCTIONS,
                tools: vec![Tool {
                    kind: "data-retrieval",
                }],
                image: format!("{base_url}/logo.png"),
            },
        },
        paths,
    }
}

/// `/premium-insights` -> `getPremiumInsights`
fn operation_id(path: &str) -> String {
    let mut id = String::from("get");
    for segment in path.trim_start_matches('/').split(['-', '/']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            id.push(first.to_ascii_uppercase());
            id.extend(chars);
        }
    }
    id
}

pub fn serve(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let manifest = build_manifest(&state.config, &state.rules);
    let response = http::build_json_response(200, &manifest);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentConfig, LoggingConfig, PaymentConfig, ServerConfig};

    fn config(account_id: Option<&str>) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
                keep_alive: true,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            logging: LoggingConfig {
                access_log: false,
                show_headers: false,
            },
            agent: AgentConfig {
                account_id: account_id.map(ToString::to_string),
                base_url: "https://agent.example.com".to_string(),
                assets_dir: "assets".to_string(),
            },
            payment: PaymentConfig {
                enabled: false,
                wallet_address: "0xabc".to_string(),
                facilitator_url: "https://facilitator.example.com".to_string(),
            },
        }
    }

    fn as_json(manifest: &Manifest) -> serde_json::Value {
        serde_json::to_value(manifest).unwrap()
    }

    #[test]
    fn test_title_and_server_url() {
        let manifest = build_manifest(&config(None), &PaymentRules::empty());
        let doc = as_json(&manifest);
        assert_eq!(doc["info"]["title"], "Bitte Docs Agent");
        assert_eq!(doc["servers"][0]["url"], "https://agent.example.com");
        assert_eq!(
            doc["x-mb"]["assistant"]["image"],
            "https://agent.example.com/logo.png"
        );
    }

    #[test]
    fn test_account_id_absent_when_unset() {
        let manifest = build_manifest(&config(None), &PaymentRules::empty());
        let doc = as_json(&manifest);
        assert!(doc["x-mb"].get("account-id").is_none());
    }

    #[test]
    fn test_account_id_present_when_set() {
        let manifest = build_manifest(&config(Some("docs.near")), &PaymentRules::empty());
        let doc = as_json(&manifest);
        assert_eq!(doc["x-mb"]["account-id"], "docs.near");
    }

    #[test]
    fn test_paths_empty_without_payment_rules() {
        let manifest = build_manifest(&config(None), &PaymentRules::empty());
        let doc = as_json(&manifest);
        assert_eq!(doc["paths"], serde_json::json!({}));
    }

    #[test]
    fn test_paths_mirror_the_rule_table() {
        let manifest = build_manifest(&config(None), &PaymentRules::standard());
        let doc = as_json(&manifest);
        let paths = doc["paths"].as_object().unwrap();
        let keys: Vec<&String> = paths.keys().collect();
        assert_eq!(keys, ["/advanced-query", "/premium-insights"]);
        assert_eq!(
            paths["/premium-insights"]["get"]["operationId"],
            "getPremiumInsights"
        );
    }

    #[test]
    fn test_operation_id_shape() {
        assert_eq!(operation_id("/premium-insights"), "getPremiumInsights");
        assert_eq!(operation_id("/advanced-query"), "getAdvancedQuery");
    }
}
