//! Domain-level constants.
//!
//! These constants define record conventions shared by every record type.

// =============================================================================
// Records
// =============================================================================

/// Identifier field used by records that don't override it
pub const DEFAULT_ID_FIELD: &str = "id";

/// Table holding sample user records
pub const USERS_TABLE: &str = "users";

/// Table used when none is given
pub const DEFAULT_TABLE: &str = "documents";
