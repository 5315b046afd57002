use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::{
    context::CallContext,
    core::table::QuoteTable,
    quote::{Author, Quote},
    types::QuoteId,
};

/// Classified store failures. None of them leave the store inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The calling context was cancelled before the operation began.
    #[error("operation cancelled")]
    Cancelled,
    /// The store holds no quotes at all.
    #[error("no quotes available")]
    NotFound,
    /// No author record exists for the name.
    #[error("author `{0}` not found")]
    AuthorNotFound(String),
    /// The author exists but every quote of theirs was deleted.
    #[error("author `{0}` has no quotes")]
    AuthorHasNoQuotes(String),
    /// No quote with the given id is stored.
    #[error("quote {0} not found")]
    QuoteNotFound(QuoteId),
    /// The author already has a quote with identical text.
    #[error("quote already exists for author `{author}`")]
    DuplicateQuote {
        /// Author the duplicate was submitted under.
        author: String,
    },
}

/// Thread-safe owner of the quote table and author index.
///
/// Reads take the shared lock, inserts and deletes take the exclusive lock,
/// so every mutation is atomic with respect to all other calls. The context
/// is checked before the lock is requested and again once it is held.
#[derive(Debug, Default)]
pub struct QuoteStore {
    table: RwLock<QuoteTable>,
}

impl QuoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `quote`, writing the assigned id into `quote.id`.
    pub fn insert(&self, ctx: &CallContext, quote: &mut Quote) -> Result<(), StoreError> {
        ctx.check()?;
        let mut table = self.write();
        ctx.check()?;
        table.insert(quote)
    }

    /// All stored quotes, ascending by id. Empty store is [`StoreError::NotFound`].
    pub fn list_all(&self, ctx: &CallContext) -> Result<Vec<Quote>, StoreError> {
        ctx.check()?;
        let table = self.read();
        ctx.check()?;
        table.list_all()
    }

    /// One quote picked uniformly at random.
    pub fn random_quote(&self, ctx: &CallContext) -> Result<Quote, StoreError> {
        ctx.check()?;
        let table = self.read();
        ctx.check()?;
        table.random_quote(&mut rand::thread_rng())
    }

    /// The author's quotes in insertion order.
    pub fn quotes_by_author(
        &self,
        ctx: &CallContext,
        author_name: &str,
    ) -> Result<Vec<Quote>, StoreError> {
        ctx.check()?;
        let table = self.read();
        ctx.check()?;
        table.quotes_by_author(author_name)
    }

    /// Deletes a quote and returns its id to the free pool.
    pub fn delete(&self, ctx: &CallContext, id: QuoteId) -> Result<(), StoreError> {
        ctx.check()?;
        let mut table = self.write();
        ctx.check()?;
        table.delete(id).map(|_| ())
    }

    /// Snapshot of an author record.
    pub fn author(&self, name: &str) -> Option<Author> {
        self.read().author(name).cloned()
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no quotes are stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Runs `f` against the table under the shared lock.
    pub fn inspect<T>(&self, f: impl FnOnce(&QuoteTable) -> T) -> T {
        f(&self.read())
    }

    // Table mutations only happen after every fallible check, so a panic
    // while the lock is held cannot leave the table half-updated.
    fn read(&self) -> RwLockReadGuard<'_, QuoteTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, QuoteTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}
