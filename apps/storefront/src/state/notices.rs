//! # Notice Queue
//!
//! Messages collected during a request and shown to the shopper on the next
//! render. Validation pushes; the page template drains.

use std::sync::{Arc, Mutex};

use minqty_core::Notice;

/// Shared queue of pending notices.
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    queue: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeState {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a notice.
    pub fn push(&self, notice: Notice) {
        self.queue.lock().expect("Notice mutex poisoned").push(notice);
    }

    /// Takes every pending notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.queue.lock().expect("Notice mutex poisoned"))
    }

    /// Number of pending notices.
    pub fn len(&self) -> usize {
        self.queue.lock().expect("Notice mutex poisoned").len()
    }

    /// Checks whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let notices = NoticeState::new();
        notices.push(Notice::error("first"));
        notices.push(Notice::error("second"));

        assert_eq!(notices.len(), 2);

        let drained: Vec<_> = notices.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(drained, vec!["first", "second"]);
        assert!(notices.is_empty());
    }
}
