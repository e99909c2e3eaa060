//! Sequencing for overlapping requests of the same kind.
//!
//! Every request takes a ticket before it is sent; when its response
//! arrives, only the holder of the newest ticket may apply it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Start a new request; every older ticket becomes stale
    pub fn advance(&mut self) {
        self.latest += 1;
    }

    /// Ticket of the most recently started request
    pub fn current(&self) -> RequestTicket {
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
