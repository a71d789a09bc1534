//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (index page, timer stream endpoint)
//!     → timer stream body flows back chunk by chunk
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
