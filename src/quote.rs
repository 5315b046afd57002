//! Quote and author records.

use serde::{Deserialize, Serialize};

use crate::types::{AuthorId, QuoteId, UNASSIGNED_ID};

/// A stored `(author, text)` pair with a store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Assigned by the store on insert; ignored on input.
    #[serde(default)]
    pub id: QuoteId,
    /// Name of the quoted author.
    #[serde(rename = "author")]
    pub author_name: String,
    /// Quotation text.
    #[serde(rename = "quote")]
    pub text: String,
}

impl Quote {
    /// Builds a quote that has not been stored yet.
    pub fn new(author_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            author_name: author_name.into(),
            text: text.into(),
        }
    }
}

/// Named aggregation of quotes. Never removed once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Monotonic author identifier.
    pub id: AuthorId,
    /// Unique author name.
    pub name: String,
    /// Quotes by this author in insertion order.
    pub quote_ids: Vec<QuoteId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: String) -> Self {
        Self {
            id,
            name,
            quote_ids: Vec::new(),
        }
    }

    /// Returns true when every quote of this author has been deleted.
    pub fn is_empty(&self) -> bool {
        self.quote_ids.is_empty()
    }
}
