//! Request middleware.
//!
//! - [`request_log::log_request`] -- one structured event per inbound request.
//! - [`error_body`] -- `{"detail"}` bodies for timeout and panic responses.

pub mod error_body;
pub mod request_log;
