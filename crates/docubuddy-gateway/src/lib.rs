//! # DocuBuddy Gateway
//!
//! The HTTP surface: a single `/ask` operation plus a health check. Every
//! failure mode is converted here into a normal success response with a
//! human-readable `answer` — transport-level errors never reach the caller.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
