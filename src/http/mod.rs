//! HTTP protocol layer module
//!
//! Response builders shared by the route handlers.

pub mod response;

pub use response::{build_404_response, build_500_response, build_json_response};
