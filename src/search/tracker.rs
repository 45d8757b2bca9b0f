use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out one ticket per search; only the latest ticket is current, so results of a
/// superseded search can be told apart and dropped.
#[derive(Clone, Debug, Default)]
pub struct SearchTracker {
    generation: Arc<AtomicU64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTracker {
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
