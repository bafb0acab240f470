//! Commands module - CLI command implementations.

pub mod demo;
pub mod record;
