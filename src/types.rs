//! Shared primitive IDs.

/// Store-assigned quote identifier. Reused after the quote is deleted.
pub type QuoteId = u64;
/// Store-assigned author identifier. Monotonic, never reused.
pub type AuthorId = u64;

/// Placeholder carried by a [`crate::quote::Quote`] before the store assigns an id.
pub const UNASSIGNED_ID: QuoteId = 0;
