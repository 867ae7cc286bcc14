//! HTTP surface: shared state, router, and route handlers

mod routes;
pub mod server;

pub use server::{build_router, run_server, ProxyState};
