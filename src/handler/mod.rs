// Request handling module entry point

mod manifest;
mod premium;
mod router;
mod static_files;

pub use manifest::build_manifest;
pub use premium::{advanced_query_payload, premium_insights_payload};
pub use router::{handle_request, RequestContext};
