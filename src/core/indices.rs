use hashbrown::HashMap;

use crate::{quote::Author, types::QuoteId};

/// Author records keyed by author name.
pub type AuthorIndex = HashMap<String, Author>;

/// Removes the first occurrence of `id`, returning whether it was present.
pub fn remove_from_vec_index(v: &mut Vec<QuoteId>, id: QuoteId) -> bool {
    if let Some(pos) = v.iter().position(|x| *x == id) {
        v.remove(pos);
        true
    } else {
        false
    }
}
