//! Shared domain logic for the MUN prep platform.
//!
//! Pure types and functions only -- no I/O. The prompt registry, context
//! assembler, and profile parsing live here so the API crate and tests can
//! exercise them without a database or gateway.

pub mod context;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod types;
