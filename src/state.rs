//! Observable snapshot cell shared between the fetcher and the screen.
//!
//! One writer (the fetch success path) and any number of readers. Every
//! publish replaces the whole snapshot, so readers only ever see the initial
//! empty collection or a complete fetched one.

use std::sync::Arc;

use tokio::sync::watch;

use crate::meal::MealCollection;

/// Receiving side of the cell. `changed().await` wakes on every publish.
pub type ScreenStateReceiver = watch::Receiver<Arc<MealCollection>>;

#[derive(Clone)]
pub struct ScreenState {
    tx: watch::Sender<Arc<MealCollection>>,
}

impl ScreenState {
    /// Create the cell holding an empty collection.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(MealCollection::default()));
        Self { tx }
    }

    /// Replace the current snapshot and notify subscribers.
    pub fn publish(&self, collection: MealCollection) {
        self.tx.send_replace(Arc::new(collection));
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<MealCollection> {
        Arc::clone(&*self.tx.borrow())
    }

    pub fn subscribe(&self) -> ScreenStateReceiver {
        self.tx.subscribe()
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}
