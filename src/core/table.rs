use hashbrown::HashMap;
use rand::Rng;

use crate::{
    core::{
        ids::IdPool,
        indices::{AuthorIndex, remove_from_vec_index},
        store::StoreError,
    },
    quote::{Author, Quote},
    types::{AuthorId, QuoteId},
};

/// Unguarded quote table and author index.
///
/// [`crate::core::store::QuoteStore`] wraps this in a lock; on its own it is a
/// plain single-owner structure.
#[derive(Debug, Default)]
pub struct QuoteTable {
    quotes: HashMap<QuoteId, Quote>,
    authors: AuthorIndex,
    ids: IdPool,
    last_author_id: AuthorId,
}

impl QuoteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `quote` and writes the assigned id back into it.
    ///
    /// Duplicate text under the same author is rejected before the table or
    /// the id pool is touched.
    pub fn insert(&mut self, quote: &mut Quote) -> Result<(), StoreError> {
        if self.has_text(&quote.author_name, &quote.text) {
            return Err(StoreError::DuplicateQuote {
                author: quote.author_name.clone(),
            });
        }

        let id = self.ids.allocate();
        quote.id = id;

        let last_author_id = &mut self.last_author_id;
        self.authors
            .entry(quote.author_name.clone())
            .or_insert_with(|| {
                *last_author_id += 1;
                Author::new(*last_author_id, quote.author_name.clone())
            })
            .quote_ids
            .push(id);
        self.quotes.insert(id, quote.clone());
        Ok(())
    }

    /// All quotes in ascending id order.
    pub fn list_all(&self) -> Result<Vec<Quote>, StoreError> {
        if self.quotes.is_empty() {
            return Err(StoreError::NotFound);
        }
        let mut quotes: Vec<Quote> = self.quotes.values().cloned().collect();
        quotes.sort_unstable_by_key(|q| q.id);
        Ok(quotes)
    }

    /// Uniform pick over a fresh [`QuoteTable::list_all`].
    pub fn random_quote<R: Rng>(&self, rng: &mut R) -> Result<Quote, StoreError> {
        let mut quotes = self.list_all()?;
        let idx = rng.gen_range(0..quotes.len());
        Ok(quotes.swap_remove(idx))
    }

    /// Quotes of `author_name` in insertion order.
    pub fn quotes_by_author(&self, author_name: &str) -> Result<Vec<Quote>, StoreError> {
        let author = self
            .authors
            .get(author_name)
            .ok_or_else(|| StoreError::AuthorNotFound(author_name.to_string()))?;
        if author.is_empty() {
            return Err(StoreError::AuthorHasNoQuotes(author_name.to_string()));
        }
        Ok(author
            .quote_ids
            .iter()
            .filter_map(|id| self.quotes.get(id))
            .cloned()
            .collect())
    }

    /// Removes a quote from both indices and releases its id.
    pub fn delete(&mut self, id: QuoteId) -> Result<Quote, StoreError> {
        let quote = self.quotes.remove(&id).ok_or(StoreError::QuoteNotFound(id))?;
        if let Some(author) = self.authors.get_mut(&quote.author_name) {
            let indexed = remove_from_vec_index(&mut author.quote_ids, id);
            debug_assert!(indexed, "quote {id} missing from author index");
        }
        self.ids.release(id);
        Ok(quote)
    }

    /// Stored quote by id.
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.get(&id)
    }

    /// Author record by name, including authors with no quotes left.
    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.get(name)
    }

    /// Every author ever seen.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when no quotes are stored.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Current id counter after compaction.
    pub fn high_water_mark(&self) -> QuoteId {
        self.ids.high_water_mark()
    }

    /// Released ids awaiting reuse, ascending.
    pub fn free_ids(&self) -> Vec<QuoteId> {
        self.ids.free_ids().collect()
    }

    fn has_text(&self, author_name: &str, text: &str) -> bool {
        self.authors.get(author_name).is_some_and(|author| {
            author
                .quote_ids
                .iter()
                .filter_map(|id| self.quotes.get(id))
                .any(|q| q.text == text)
        })
    }
}
