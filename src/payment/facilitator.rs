//! Facilitator-backed payment gate
//!
//! Adapter for an x402-style facilitator service. A request without the
//! payment header gets a 402 challenge describing the rule; a request
//! carrying a proof has it forwarded verbatim to the facilitator's
//! `/verify` and `/settle` endpoints. Proof contents are never inspected
//! here.

use std::time::Duration;

use async_trait::async_trait;
use hyper::HeaderMap;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::{Admission, PaymentGate, PaymentRule};
use crate::config::PaymentConfig;
use crate::http::build_json_response;
use crate::logger;

/// Header carrying the client's payment proof.
pub const PAYMENT_HEADER: &str = "X-PAYMENT";

const X402_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum FacilitatorError {
    #[error("facilitator request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("payment verification rejected: {0}")]
    VerifyRejected(String),
    #[error("payment settlement failed: {0}")]
    SettleFailed(String),
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(rename = "isValid")]
    is_valid: bool,
    #[serde(rename = "invalidReason")]
    invalid_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettleResponse {
    success: bool,
    #[serde(rename = "errorReason")]
    error_reason: Option<String>,
}

/// Payment gate delegating verification and settlement to a facilitator.
pub struct FacilitatorGate {
    client: reqwest::Client,
    facilitator_url: String,
    wallet_address: String,
}

impl FacilitatorGate {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            facilitator_url: config.facilitator_url.trim_end_matches('/').to_string(),
            wallet_address: config.wallet_address.clone(),
        }
    }

    /// Requirement object shared by the 402 challenge and the facilitator
    /// request bodies.
    fn requirements(&self, rule: &PaymentRule) -> serde_json::Value {
        json!({
            "scheme": "exact",
            "network": rule.network,
            "maxAmountRequired": rule.price,
            "resource": rule.path,
            "description": rule.description,
            "mimeType": rule.mime_type,
            "payTo": self.wallet_address,
            "maxTimeoutSeconds": rule.max_timeout_seconds,
        })
    }

    /// Build the 402 challenge for a rule.
    pub fn challenge_body(&self, rule: &PaymentRule, reason: &str) -> serde_json::Value {
        json!({
            "x402Version": X402_VERSION,
            "error": reason,
            "accepts": [self.requirements(rule)],
        })
    }

    async fn verify_and_settle(
        &self,
        payment_header: &str,
        rule: &PaymentRule,
    ) -> Result<(), FacilitatorError> {
        let body = json!({
            "x402Version": X402_VERSION,
            "paymentHeader": payment_header,
            "paymentRequirements": self.requirements(rule),
        });
        let timeout = Duration::from_secs(rule.max_timeout_seconds);

        let verify: VerifyResponse = self
            .client
            .post(format!("{}/verify", self.facilitator_url))
            .timeout(timeout)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        if !verify.is_valid {
            return Err(FacilitatorError::VerifyRejected(
                verify
                    .invalid_reason
                    .unwrap_or_else(|| "no reason given".to_string()),
            ));
        }

        let settle: SettleResponse = self
            .client
            .post(format!("{}/settle", self.facilitator_url))
            .timeout(timeout)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        if !settle.success {
            return Err(FacilitatorError::SettleFailed(
                settle
                    .error_reason
                    .unwrap_or_else(|| "no reason given".to_string()),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl PaymentGate for FacilitatorGate {
    async fn admit(&self, headers: &HeaderMap, rule: &PaymentRule) -> Admission {
        let Some(payment_header) = headers.get(PAYMENT_HEADER).and_then(|v| v.to_str().ok())
        else {
            let body = self.challenge_body(rule, "X-PAYMENT header is required");
            return Admission::Challenge(build_json_response(402, &body));
        };

        match self.verify_and_settle(payment_header, rule).await {
            Ok(()) => Admission::Allow,
            Err(e) => {
                // A broken facilitator degrades to "payment required",
                // never a server error.
                logger::log_warning(&format!("Payment denied for {}: {e}", rule.path));
                let body = self.challenge_body(rule, &e.to_string());
                Admission::Challenge(build_json_response(402, &body))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FACILITATOR_URL, DEFAULT_WALLET_ADDRESS};
    use crate::payment::PaymentRules;

    fn gate() -> FacilitatorGate {
        FacilitatorGate::new(&PaymentConfig {
            enabled: true,
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            facilitator_url: DEFAULT_FACILITATOR_URL.to_string(),
        })
    }

    #[test]
    fn test_challenge_carries_rule_and_wallet() {
        let rules = PaymentRules::standard();
        let rule = rules.get("/premium-insights").unwrap();
        let body = gate().challenge_body(rule, "X-PAYMENT header is required");

        assert_eq!(body["x402Version"], 1);
        let accepts = body["accepts"].as_array().unwrap();
        assert_eq!(accepts.len(), 1);
        assert_eq!(accepts[0]["maxAmountRequired"], "$0.01");
        assert_eq!(accepts[0]["network"], "base-sepolia");
        assert_eq!(accepts[0]["payTo"], DEFAULT_WALLET_ADDRESS);
        assert_eq!(accepts[0]["resource"], "/premium-insights");
    }

    #[tokio::test]
    async fn test_missing_header_yields_402_challenge() {
        let rules = PaymentRules::standard();
        let rule = rules.get("/advanced-query").unwrap();
        let headers = HeaderMap::new();

        match gate().admit(&headers, rule).await {
            Admission::Challenge(resp) => {
                assert_eq!(resp.status(), 402);
                assert_eq!(resp.headers()["Content-Type"], "application/json");
            }
            Admission::Allow => panic!("request without proof must be challenged"),
        }
    }
}
