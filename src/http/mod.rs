//! HTTP protocol layer module
//!
//! Response builders and header helpers shared by the request handlers.

pub mod response;

// Re-export commonly used builders
pub use response::{
    apply_common_headers, build_404_response, build_405_response, build_health_response,
    build_json_response, build_options_response, build_text_response,
};
