//! Shared data model of the rail QR tracker.
//!
//! Everything here is plain data plus pure projections over it, so the same types can be
//! serialized by the backend and consumed by any client.

pub mod model;
pub mod requests;
pub mod responses;
