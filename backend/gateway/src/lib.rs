//! Slipscan HTTP gateway.
//!
//! One catch-all route: OPTIONS preflight, otherwise a JSON body carrying
//! a base64 slip image, run through decode → extract → analyze behind a
//! single error boundary.

pub mod routes;
pub mod server;

pub use server::{scan_router, start_server, AppState};
