//! Timer Stream Logging Demo Library

pub mod config;
pub mod http;
pub mod observability;
pub mod rng;
pub mod timer;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use timer::Timer;
