//! Core type definitions

pub mod record;
pub mod store;

// Re-export commonly used types
pub use record::*;
pub use store::*;
