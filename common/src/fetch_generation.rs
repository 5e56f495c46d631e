//! Last-write-wins bookkeeping for overlapping fetches.

use tracing::debug;

/// Handed out when a fetch starts and checked when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGenerations {
    latest: u64,
}

impl FetchGenerations {
    /// Starts a new generation; every ticket issued before it becomes stale.
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Passes `response` through only if `ticket` is still the latest one.
    pub fn accept<T>(&self, ticket: FetchTicket, response: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(response)
        } else {
            debug!("dropping stale response for fetch {} (latest is {})", ticket.0, self.latest);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut generations = FetchGenerations::default();
        let first = generations.issue();
        assert!(generations.is_current(first));
        let second = generations.issue();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
        assert!(first < second);
    }

    #[test]
    fn slow_early_response_is_discarded() {
        let mut generations = FetchGenerations::default();
        let slow = generations.issue();
        let fast = generations.issue();
        assert_eq!(generations.accept(fast, "page 2"), Some("page 2"));
        assert_eq!(generations.accept(slow, "page 1"), None);
    }
}
