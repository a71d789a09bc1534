//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce tracing events:
//!     → logging.rs (subscriber wiring: console + rotating files)
//!     → rolling.rs (size-capped file sinks with numbered backups)
//!     → instrument.rs (entry/exit/error wrappers around calls)
//!
//! Sinks:
//!     → console          (human-readable, every target)
//!     → logs/app.log     (human-readable, value-producing targets)
//!     → logs/app.json    (JSON lines, value-producing targets)
//!     → logs/error.json  (JSON lines, errors only)
//! ```
//!
//! # Design Decisions
//! - One subscriber, four layers; per-layer filters do the routing
//! - Rotation is size-based with a bounded number of backups
//! - Sinks are plain `io::Write` values behind a `Mutex`

pub mod instrument;
pub mod logging;
pub mod rolling;
