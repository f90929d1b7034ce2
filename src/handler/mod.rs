//! Request handler module
//!
//! Route table dispatch and the translation endpoint behind it.

pub mod router;
pub mod translate;

// Re-export main entry point
pub use router::handle_request;
