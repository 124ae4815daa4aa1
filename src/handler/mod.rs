//! Request handler module
//!
//! Routing dispatch plus the chat endpoint itself.

pub mod chatbot;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
