//! Domain layer - Record contract and value types.
//!
//! This crate defines what a storable record is, independent of where it
//! is stored. Repositories in `record-store` only ever see the traits and
//! field maps defined here.

pub mod constants;
pub mod document;
pub mod error;
pub mod merge;
pub mod record;
pub mod user;

pub use constants::*;
pub use document::{Document, DocumentPatch};
pub use error::{DomainError, DomainResult};
pub use merge::deep_merge;
pub use record::{identifier_of, to_field_map, FieldMap, Record, RecordPatch};
pub use user::{Address, AddressPatch, Meta, MetaPatch, User, UserPatch};
