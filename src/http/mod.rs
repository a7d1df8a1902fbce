//! HTTP protocol layer module
//!
//! Response builders, MIME lookup and conditional-request helpers,
//! decoupled from the agent's route semantics.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_asset_response, build_json_response,
};
