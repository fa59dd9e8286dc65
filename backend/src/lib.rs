//! Backend of the rail part QR tracking service.
//!
//! `main.rs` only wires configuration, logging and the HTTP server; everything the routes use
//! lives in this library so the HTTP tests can build the same application.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod pdf;
pub mod services;
pub mod state;
pub mod store;
pub mod summary;
pub mod uid;
