//! Validation and logging in front of the store.

/// Quote use-case service.
pub mod quote_service;
/// Input validation rules.
pub mod validate;
