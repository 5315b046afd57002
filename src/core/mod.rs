//! In-memory quote store and its index helpers.

/// Compacting id allocation.
pub mod ids;
/// Author index aliases and helpers.
pub mod indices;
/// Locked store and its error type.
pub mod store;
/// Unguarded quote table.
pub mod table;
