//! Screen controller: owns the snapshot cell and the background work of one
//! screen.
//!
//! Tasks spawned here live as long as the controller. Dropping it aborts any
//! fetch still in flight and stops the snapshot forwarder.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::fetch::{FetchError, MealFetcher};
use crate::meal::MealCollection;
use crate::state::ScreenState;

/// Callback invoked with a fetch failure after it has been logged.
pub type FailureHook = Arc<dyn Fn(&FetchError) + Send + Sync>;

pub struct MealScreenController {
    runtime: Handle,
    fetcher: MealFetcher,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    fetches: AtomicUsize,
    failure_hook: Option<FailureHook>,
}

impl MealScreenController {
    pub fn new(runtime: Handle, fetcher: MealFetcher) -> Self {
        Self {
            runtime,
            fetcher,
            tasks: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
            failure_hook: None,
        }
    }

    /// Build the controller, its HTTP client and an empty snapshot cell.
    pub fn from_config(runtime: Handle, config: &Config) -> Result<Self, FetchError> {
        let client = MealFetcher::build_client(&config.http)?;
        let fetcher = MealFetcher::new(client, config.endpoint.clone(), ScreenState::new());
        Ok(Self::new(runtime, fetcher))
    }

    /// Report fetch failures to `hook` in addition to the log.
    pub fn with_failure_hook(mut self, hook: FailureHook) -> Self {
        self.failure_hook = Some(hook);
        self
    }

    pub fn state(&self) -> &ScreenState {
        self.fetcher.state()
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Start a fetch in the background.
    ///
    /// Not deduplicated: a call while another fetch is running issues a second
    /// request and whichever finishes last wins.
    pub fn fetch(&self) {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let fetcher = self.fetcher.clone();
        let hook = self.failure_hook.clone();
        let task = self.runtime.spawn(async move {
            if let Err(err) = fetcher.refresh().await {
                if let Some(hook) = hook {
                    hook(&err);
                }
            }
        });
        self.track(task);
    }

    /// Forward every published snapshot to `sink` until the controller drops.
    pub fn on_snapshot<F>(&self, sink: F)
    where
        F: Fn(Arc<MealCollection>) + Send + 'static,
    {
        let mut rx = self.state().subscribe();
        let task = self.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = Arc::clone(&*rx.borrow_and_update());
                sink(snapshot);
            }
        });
        self.track(task);
    }

    /// Tasks still running.
    pub fn active_tasks(&self) -> usize {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.len()
    }

    fn track(&self, task: JoinHandle<()>) {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(task);
    }
}

impl Drop for MealScreenController {
    fn drop(&mut self) {
        let tasks = std::mem::take(&mut *self.tasks.lock());
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "Cancelling screen tasks");
        }
        for task in tasks {
            task.abort();
        }
    }
}
