// Application state module
// Immutable per-process state handed to the router

use std::sync::Arc;

use super::types::Config;
use crate::assets::AssetTable;
use crate::payment::{FacilitatorGate, PaymentGate, PaymentRules};

/// Application state
///
/// Built once at startup and shared read-only between connections; there
/// is no runtime reconfiguration.
pub struct AppState {
    pub config: Config,
    pub assets: AssetTable,
    pub rules: PaymentRules,
    pub gate: Option<Arc<dyn PaymentGate>>,
}

impl AppState {
    /// Create `AppState` from a loaded configuration.
    ///
    /// The asset table is resolved here; the payment rule table and the
    /// facilitator adapter exist only when payment gating is enabled.
    pub fn new(config: Config) -> Self {
        let assets = AssetTable::new(&config.agent.assets_dir);

        let (rules, gate) = if config.payment.enabled {
            let gate: Arc<dyn PaymentGate> = Arc::new(FacilitatorGate::new(&config.payment));
            (PaymentRules::standard(), Some(gate))
        } else {
            (PaymentRules::empty(), None)
        };

        Self {
            config,
            assets,
            rules,
            gate,
        }
    }

    /// Replace the payment gate, keeping the rule table.
    ///
    /// Used by tests to substitute the facilitator adapter with a stub.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<dyn PaymentGate>) -> Self {
        self.gate = Some(gate);
        self
    }
}
