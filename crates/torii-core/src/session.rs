//! Staleness tracking for in-flight view requests.
//!
//! Requests already in flight when the user navigates away are not
//! aborted. Instead, each navigation bumps a generation counter; a
//! response carries the ticket it was issued under, and the caller drops
//! any response whose ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter for the currently displayed item.
#[derive(Debug, Default)]
pub struct NavigationSession {
    current: AtomicU64,
}

/// Marker for one navigation generation. Copy it into the request's
/// completion path and check it before applying the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl NavigationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new navigation target, invalidating all earlier tickets.
    pub fn navigate(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response carrying `ticket` still matches the displayed
    /// target.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let session = NavigationSession::new();
        let ticket = session.navigate();
        assert!(session.is_current(ticket));
    }

    #[test]
    fn navigation_invalidates_earlier_tickets() {
        let session = NavigationSession::new();
        let first = session.navigate();
        let second = session.navigate();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn tickets_from_before_any_navigation_never_match() {
        let session = NavigationSession::new();
        let stale = session.navigate();
        session.navigate();
        session.navigate();
        assert!(!session.is_current(stale));
    }
}
