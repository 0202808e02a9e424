//! Timer helpers for the single-threaded event loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Proof of one trigger, checked later to see whether it is still the latest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debouncer.
///
/// Each [`trigger`](Self::trigger) supersedes every earlier one. A caller
/// waits with [`settle`](Self::settle) and acts only if no newer trigger
/// arrived during the delay. Clones share the same generation counter.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn trigger(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Wait out the delay, then report whether `ticket` is still the latest.
    pub async fn settle(&self, ticket: Ticket) -> bool {
        tokio::time::sleep(self.delay).await;
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_trigger_supersedes_older() {
        let debouncer = Debouncer::new(Duration::from_millis(250));
        let first = debouncer.trigger();
        assert!(debouncer.is_current(first));
        let second = debouncer.trigger();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn clones_share_generation() {
        let debouncer = Debouncer::new(Duration::from_millis(250));
        let ticket = debouncer.trigger();
        debouncer.clone().trigger();
        assert!(!debouncer.is_current(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_trigger_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(250));

        let early = debouncer.trigger();
        let waiter = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.settle(early).await })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        let late = debouncer.trigger();

        assert!(!waiter.await.unwrap());
        assert!(debouncer.settle(late).await);
    }
}
