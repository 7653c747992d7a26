//! Wire types shared with the gym REST API.
//!
//! The backend is an external service; this crate only mirrors its JSON
//! payloads. All fields are `camelCase` on the wire.

pub mod auth;
pub mod customers;
pub mod paging;
pub mod sms;
pub mod sync;
