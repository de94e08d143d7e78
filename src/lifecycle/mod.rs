//! Actor wiring and process-wide setup.

pub mod system;
pub mod tracing;

pub use system::AdminSystem;
pub use self::tracing::setup_tracing;
