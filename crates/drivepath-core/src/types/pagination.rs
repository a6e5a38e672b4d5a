//! Continuation-token pagination types.

use serde::{Deserialize, Serialize};

/// Default number of records requested per listing call.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Largest page size the Drive API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// One page of a listing returned by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records on this page (may be empty even when more pages follow).
    pub items: Vec<T>,
    /// Cursor for the next page; `None` or empty ends the listing.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token,
        }
    }

    /// Create the final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// The token to request next, treating an empty token as end of listing.
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Clamp a configured page size into the range the remote accepts.
pub fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_ends_listing() {
        let page: Page<u8> = Page::new(vec![], Some(String::new()));
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn test_token_on_empty_page_continues() {
        let page: Page<u8> = Page::new(vec![], Some("next".to_string()));
        assert_eq!(page.continuation(), Some("next"));
    }

    #[test]
    fn test_clamp_page_size() {
        assert_eq!(clamp_page_size(0), 1);
        assert_eq!(clamp_page_size(5000), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(DEFAULT_PAGE_SIZE), 100);
    }
}
