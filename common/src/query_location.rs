//! Where the current query string lives.
//!
//! The browser keeps it in the address bar; tests keep it in memory.

use std::cell::RefCell;

pub trait QueryLocation {
    /// Query string without the leading `?`.
    fn current_query(&self) -> String;

    /// Replaces the query without adding a history entry.
    fn replace_query(&self, query: &str);

    /// Replaces the query only when it differs. Returns whether it did.
    fn sync_query(&self, query: &str) -> bool {
        if self.current_query() == query {
            return false;
        }
        self.replace_query(query);
        true
    }
}

#[derive(Debug, Default)]
pub struct MemoryLocation {
    query: RefCell<String>,
    replacements: RefCell<Vec<String>>,
}

impl MemoryLocation {
    pub fn new(query: &str) -> Self {
        Self {
            query: RefCell::new(query.strip_prefix('?').unwrap_or(query).to_string()),
            replacements: RefCell::new(Vec::new()),
        }
    }

    /// Every query written through `replace_query`, oldest first.
    pub fn replacements(&self) -> Vec<String> {
        self.replacements.borrow().clone()
    }
}

impl QueryLocation for MemoryLocation {
    fn current_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.replacements.borrow_mut().push(query.to_string());
    }
}
