use std::time::Duration;

/// Wait after a navigation before the next preview starts, so audio does not
/// fire mid-transition
pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(150);

/// A deferred play request.
///
/// Only honoured if nothing else happened since it was issued and the album
/// it was issued for is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTicket {
    generation: u64,
    album_id: u64,
    delay: Duration,
}

impl AutoplayTicket {
    pub fn album_id(&self) -> u64 {
        self.album_id
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Hands out autoplay tickets and revokes them.
///
/// Any later `schedule` or `invalidate` makes earlier tickets stale.
#[derive(Debug, Default)]
pub struct AutoplayScheduler {
    generation: u64,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, album_id: u64, delay: Duration) -> AutoplayTicket {
        self.generation += 1;
        AutoplayTicket {
            generation: self.generation,
            album_id,
            delay,
        }
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: &AutoplayTicket) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut s = AutoplayScheduler::new();
        let first = s.schedule(1, DEFAULT_AUTOPLAY_DELAY);
        let second = s.schedule(2, DEFAULT_AUTOPLAY_DELAY);
        assert!(!s.is_current(&first));
        assert!(s.is_current(&second));
        assert_eq!(second.album_id(), 2);
    }

    #[test]
    fn test_invalidate_revokes_outstanding_ticket() {
        let mut s = AutoplayScheduler::new();
        let ticket = s.schedule(7, Duration::from_millis(10));
        s.invalidate();
        assert!(!s.is_current(&ticket));
    }
}
