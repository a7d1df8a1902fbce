//! Payment gating module
//!
//! The router stays unaware of any verification protocol: a gated route
//! asks the configured [`PaymentGate`] for admission and either runs its
//! handler or returns the gate's challenge response as-is. The only
//! things this crate contributes are the rule table and the facilitator
//! adapter in [`facilitator`].

mod facilitator;

use std::collections::BTreeMap;

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Response};

pub use facilitator::{FacilitatorError, FacilitatorGate, PAYMENT_HEADER};

/// Outcome of a gate admission check.
pub enum Admission {
    /// Request may proceed to the local handler unmodified.
    Allow,
    /// Short-circuit with this response (a 402 challenge).
    Challenge(Response<Full<Bytes>>),
}

/// Admission check for paywalled routes.
///
/// Implementations own the whole challenge/verify/settle protocol; the
/// router only forwards request headers and the matching rule.
#[async_trait]
pub trait PaymentGate: Send + Sync {
    async fn admit(&self, headers: &HeaderMap, rule: &PaymentRule) -> Admission;
}

/// Pricing rule for one protected path.
#[derive(Debug, Clone)]
pub struct PaymentRule {
    pub path: &'static str,
    pub price: &'static str,
    pub network: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
    pub max_timeout_seconds: u64,
}

/// Rule table: protected path -> pricing rule.
///
/// Declared once at process start and never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct PaymentRules {
    rules: BTreeMap<&'static str, PaymentRule>,
}

impl PaymentRules {
    /// Empty table for the non-payment variant.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The two premium routes the agent sells.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            "/premium-insights",
            PaymentRule {
                path: "/premium-insights",
                price: "$0.01",
                network: "base-sepolia",
                description: "Premium market insights and analytics data",
                mime_type: "application/json",
                max_timeout_seconds: 60,
            },
        );
        rules.insert(
            "/advanced-query",
            PaymentRule {
                path: "/advanced-query",
                price: "$0.05",
                network: "base-sepolia",
                description: "Advanced analytics query with premium data access",
                mime_type: "application/json",
                max_timeout_seconds: 120,
            },
        );
        Self { rules }
    }

    pub fn get(&self, path: &str) -> Option<&PaymentRule> {
        self.rules.get(path)
    }

    /// Rules in path order, for manifest path generation.
    pub fn iter(&self) -> impl Iterator<Item = &PaymentRule> {
        self.rules.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_exactly_the_two_premium_routes() {
        let rules = PaymentRules::standard();
        assert!(rules.get("/premium-insights").is_some());
        assert!(rules.get("/advanced-query").is_some());
        assert_eq!(rules.iter().count(), 2);
        assert!(rules.get("/").is_none());
    }

    #[test]
    fn test_empty_table() {
        let rules = PaymentRules::empty();
        assert_eq!(rules.iter().count(), 0);
        assert!(rules.get("/premium-insights").is_none());
    }

    #[test]
    fn test_rule_prices() {
        let rules = PaymentRules::standard();
        assert_eq!(rules.get("/premium-insights").unwrap().price, "$0.01");
        assert_eq!(rules.get("/advanced-query").unwrap().price, "$0.05");
    }
}
