pub mod entities;
pub mod routines;
pub mod seed;

// Re-export tracing for use in this crate
pub use tracing;
