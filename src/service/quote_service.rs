use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{
    context::CallContext,
    core::store::{QuoteStore, StoreError},
    quote::Quote,
    service::validate::{ValidationError, validate_author, validate_quote},
    types::QuoteId,
};

/// Failures surfaced to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Caller input broke a validation rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validating, logging front for a shared [`QuoteStore`].
#[derive(Debug, Clone)]
pub struct QuoteService {
    store: Arc<QuoteStore>,
}

impl QuoteService {
    /// Wraps an existing store.
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }

    /// Underlying store handle.
    pub fn store(&self) -> &Arc<QuoteStore> {
        &self.store
    }

    /// Validates and stores a quote. Author and text are stored trimmed.
    pub fn add_quote(&self, ctx: &CallContext, quote: &mut Quote) -> Result<(), ServiceError> {
        let (author, text) = validate_quote(&quote.author_name, &quote.text).inspect_err(|e| {
            warn!(err = %e, "rejected quote submission");
        })?;
        let (author, text) = (author.to_string(), text.to_string());
        quote.author_name = author;
        quote.text = text;

        self.store.insert(ctx, quote).inspect_err(|e| {
            log_store_error(e, "failed to add quote");
        })?;
        info!(quote_id = quote.id, author = %quote.author_name, "quote added");
        Ok(())
    }

    /// Every stored quote.
    pub fn list_quotes(&self, ctx: &CallContext) -> Result<Vec<Quote>, ServiceError> {
        let quotes = self.store.list_all(ctx).inspect_err(|e| {
            log_store_error(e, "failed to list quotes");
        })?;
        debug!(count = quotes.len(), "listed quotes");
        Ok(quotes)
    }

    /// A single random quote.
    pub fn random_quote(&self, ctx: &CallContext) -> Result<Quote, ServiceError> {
        let quote = self.store.random_quote(ctx).inspect_err(|e| {
            log_store_error(e, "failed to pick a random quote");
        })?;
        debug!(quote_id = quote.id, "picked random quote");
        Ok(quote)
    }

    /// Quotes by a validated author name.
    pub fn quotes_by_author(
        &self,
        ctx: &CallContext,
        author_name: &str,
    ) -> Result<Vec<Quote>, ServiceError> {
        let author = validate_author(author_name).inspect_err(|e| {
            warn!(err = %e, "rejected author lookup");
        })?;
        let quotes = self.store.quotes_by_author(ctx, author).inspect_err(|e| {
            log_store_error(e, "failed to list quotes by author");
        })?;
        debug!(author, count = quotes.len(), "listed quotes by author");
        Ok(quotes)
    }

    /// Deletes a quote by id.
    pub fn delete_quote(&self, ctx: &CallContext, id: QuoteId) -> Result<(), ServiceError> {
        self.store.delete(ctx, id).inspect_err(|e| {
            log_store_error(e, "failed to delete quote");
        })?;
        info!(quote_id = id, "quote deleted");
        Ok(())
    }
}

fn log_store_error(err: &StoreError, msg: &str) {
    match err {
        StoreError::Cancelled => error!(err = %err, "{msg}"),
        _ => warn!(err = %err, "{msg}"),
    }
}
