//! Core types and error handling for textmap.
//!
//! This module hosts the crate-level error type shared by every component.
//! Setup-time configuration problems are fatal and reported through
//! [`MapError`]; render-time has no error surface at all (missing
//! placeholder bindings render as empty text, absent batch entries are
//! skipped).

pub mod error;

pub use error::MapError;

/// Convenient result alias for setup-time operations.
pub type Result<T> = std::result::Result<T, MapError>;
