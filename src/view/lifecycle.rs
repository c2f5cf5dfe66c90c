//! Request liveness
//!
//! A response may only touch view state if the view that asked for it is
//! still mounted and no newer request has been issued on the same slot.

/// Handle for one outstanding request, carrying its generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// One kind of request a view can have in flight (load, submit, delete)
#[derive(Debug, Default)]
pub struct RequestSlot {
    latest: Option<Ticket>,
}

impl RequestSlot {
    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }
}

/// Lifetime of a mounted view
#[derive(Debug)]
pub struct Lifecycle {
    generation: u64,
    alive: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            generation: 0,
            alive: true,
        }
    }

    /// Issue a ticket on `slot`, superseding whatever was pending there.
    pub fn begin(&mut self, slot: &mut RequestSlot) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        slot.latest = Some(ticket);
        ticket
    }

    /// Accept the response for `ticket` if it is still current.
    ///
    /// Clears the slot on acceptance. Stale responses leave it untouched.
    pub fn settle(&self, slot: &mut RequestSlot, ticket: Ticket) -> bool {
        if !self.alive {
            tracing::debug!(generation = ticket.0, "Dropping response for torn-down view");
            return false;
        }
        if slot.latest != Some(ticket) {
            tracing::debug!(generation = ticket.0, "Dropping superseded response");
            return false;
        }
        slot.latest = None;
        true
    }

    pub fn teardown(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_ticket_settles_once() {
        let mut lifecycle = Lifecycle::new();
        let mut slot = RequestSlot::default();

        let ticket = lifecycle.begin(&mut slot);
        assert!(slot.is_pending());
        assert!(lifecycle.settle(&mut slot, ticket));
        assert!(!slot.is_pending());
        assert!(!lifecycle.settle(&mut slot, ticket));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut lifecycle = Lifecycle::new();
        let mut slot = RequestSlot::default();

        let first = lifecycle.begin(&mut slot);
        let second = lifecycle.begin(&mut slot);
        assert!(second.generation() > first.generation());

        assert!(!lifecycle.settle(&mut slot, first));
        assert!(slot.is_pending());
        assert!(lifecycle.settle(&mut slot, second));
    }

    #[test]
    fn test_teardown_rejects_everything() {
        let mut lifecycle = Lifecycle::new();
        let mut slot = RequestSlot::default();
        let ticket = lifecycle.begin(&mut slot);

        lifecycle.teardown();
        assert!(!lifecycle.is_alive());
        assert!(!lifecycle.settle(&mut slot, ticket));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut lifecycle = Lifecycle::new();
        let mut load = RequestSlot::default();
        let mut submit = RequestSlot::default();

        let load_ticket = lifecycle.begin(&mut load);
        let submit_ticket = lifecycle.begin(&mut submit);

        assert!(!lifecycle.settle(&mut submit, load_ticket));
        assert!(lifecycle.settle(&mut load, load_ticket));
        assert!(lifecycle.settle(&mut submit, submit_ticket));
    }
}
