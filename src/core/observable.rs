//! # Displayed Items
//!
//! The one piece of mutable state the screen renders from. Built on a
//! `tokio::sync::watch` channel: the reducer publishes, the view subscribes
//! once and is told when the list changes.
//!
//! ```text
//! fetch task ──Action──▶ update() ──publish()──▶ watch ──changed──▶ redraw
//! ```

use tokio::sync::watch;

pub struct DisplayedItems {
    sender: watch::Sender<Vec<String>>,
}

impl Default for DisplayedItems {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayedItems {
    /// Starts out empty.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self { sender }
    }

    /// Replaces the list. Subscribers are only notified when the new list
    /// differs from the current one. Returns whether it did.
    pub fn publish(&self, items: Vec<String>) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == items {
                false
            } else {
                *current = items;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.sender.subscribe()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.sender.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }
}
