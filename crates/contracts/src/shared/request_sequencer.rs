//! Stale-response guard for list fetches.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Issues increasing tickets; only the most recent one may commit its result.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate the outstanding request without starting a new one
    /// (e.g. the category became empty).
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_commits() {
        let seq = RequestSequencer::new();
        let elves = seq.issue();
        assert!(seq.is_current(elves));
        let dwarves = seq.issue();
        assert!(!seq.is_current(elves));
        assert!(seq.is_current(dwarves));
    }

    #[test]
    fn test_cancel_invalidates_outstanding() {
        let seq = RequestSequencer::new();
        let t = seq.issue();
        seq.cancel();
        assert!(!seq.is_current(t));
    }
}
