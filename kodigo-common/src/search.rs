use std::fmt::Display;

use crate::item::SearchResultItem;

/// Term searched once when the home page mounts
pub const DEFAULT_SEARCH_TERM: &str = "jack johnson";

/// Handle for one issued search request.
///
/// Returned by [`SearchState::begin`] and handed back to [`SearchState::settle`]
/// together with the response, so late responses can be recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    term: String,
}

impl SearchTicket {
    /// The trimmed term to send to the catalog
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// State behind the results section.
///
/// `items` is only ever replaced as a whole. A failed search keeps the
/// previous items on screen and sets `error` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub term: String,
    pub items: Vec<SearchResultItem>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a page whose first search starts on mount, so the loading
    /// message shows from the first frame.
    pub fn starting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Start a search for `term`.
    ///
    /// Returns `None` without touching any state when the term is blank.
    /// Otherwise marks the state as loading, clears the error, and issues a
    /// ticket newer than every ticket issued before.
    pub fn begin(&mut self, term: &str) -> Option<SearchTicket> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        self.issued += 1;
        self.term = term.to_string();
        self.loading = true;
        self.error = None;

        Some(SearchTicket {
            seq: self.issued,
            term: self.term.clone(),
        })
    }

    /// Apply the outcome of a search.
    ///
    /// Responses for any ticket other than the most recently issued one are
    /// dropped and `false` is returned; the newer request is still in flight
    /// and owns the loading flag.
    pub fn settle<E: Display>(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<SearchResultItem>, E>,
    ) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
            }
            Err(e) => {
                self.error = Some(format!("No se pudieron cargar los resultados: {e}"));
            }
        }
        self.loading = false;
        true
    }

    /// Whether `ticket` belongs to the latest issued request
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.issued
    }
}
