//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Parse flags → Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown (shutdown.rs + signals.rs):
//!     SIGINT/SIGTERM → broadcast → stop accepting → drain in-flight → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
