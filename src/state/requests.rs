use std::cell::Cell;
use std::rc::Rc;

/// Stale-response guard for a slot that can have overlapping in-flight
/// requests, such as the dashboard scope when the user switches areas
/// quickly. Each fetch takes a ticket; a response is applied only while
/// its ticket is still the latest, so a slow early response can never
/// overwrite a fast later one.
///
/// Single-threaded by construction (UI thread), hence `Rc<Cell>`.
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    /// Whether a ticket is still the latest for this slot
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let sequencer = RequestSequencer::new();

        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let sequencer = RequestSequencer::new();
        let handle = sequencer.clone();

        let first = sequencer.begin();
        assert!(handle.is_current(first));

        let second = handle.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
