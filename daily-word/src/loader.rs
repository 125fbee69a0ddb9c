use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type LoaderId = u32;

/// Single-flight registry for background loads. Each load is keyed by a fixed
/// id: initializing an id that is already in flight attaches to the running
/// load instead of spawning a second one, and initializing an id that already
/// delivered redelivers the cached result. Results arrive on the receiver
/// returned by [`LoaderManager::new`], so completion is always observed on the
/// task that drives the screen.
pub struct LoaderManager<T: Clone + Send + 'static> {
    tx: mpsc::UnboundedSender<(LoaderId, T)>,
    in_flight: HashMap<LoaderId, JoinHandle<()>>,
    delivered: HashMap<LoaderId, T>,
}

impl<T: Clone + Send + 'static> LoaderManager<T> {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(LoaderId, T)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                in_flight: HashMap::new(),
                delivered: HashMap::new(),
            },
            rx,
        )
    }

    pub fn init_loader<F>(&mut self, id: LoaderId, load: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        if let Some(result) = self.delivered.get(&id) {
            tracing::debug!(id, "redelivering cached load result");
            let _ = self.tx.send((id, result.clone()));
            return;
        }
        if self.in_flight.contains_key(&id) {
            tracing::debug!(id, "load already in flight");
            return;
        }
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = load.await;
            let _ = tx.send((id, result));
        });
        self.in_flight.insert(id, handle);
    }

    /// Marks `id` as delivered. Call after receiving its result, so later
    /// `init_loader` calls for the same id reuse it.
    pub fn complete(&mut self, id: LoaderId, result: T) {
        self.in_flight.remove(&id);
        self.delivered.insert(id, result);
    }

    /// Aborts in-flight loads and drops cached results. The screen calls this
    /// when it is torn down.
    pub fn destroy(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
        self.delivered.clear();
    }
}

impl<T: Clone + Send + 'static> Drop for LoaderManager<T> {
    fn drop(&mut self) {
        for handle in self.in_flight.values() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::Notify;
    use tokio::time::timeout;

    use super::*;

    const LOAD_ID: LoaderId = 1;

    #[tokio::test]
    async fn second_init_attaches_to_the_in_flight_load() {
        let (mut loaders, mut loads) = LoaderManager::new();
        let started = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());

        for _ in 0..2 {
            let started = Arc::clone(&started);
            let release = Arc::clone(&release);
            loaders.init_loader(LOAD_ID, async move {
                started.fetch_add(1, Ordering::SeqCst);
                release.notified().await;
                42u32
            });
        }

        release.notify_one();
        let (id, result) = timeout(Duration::from_secs(2), loads.recv())
            .await
            .expect("load never finished")
            .expect("channel closed");
        assert_eq!((id, result), (LOAD_ID, 42));
        assert_eq!(started.load(Ordering::SeqCst), 1);

        // nothing else was spawned, so nothing else arrives
        assert!(timeout(Duration::from_millis(100), loads.recv())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn completed_loads_are_redelivered_from_cache() {
        let (mut loaders, mut loads) = LoaderManager::new();
        let started = Arc::new(AtomicUsize::new(0));

        loaders.init_loader(LOAD_ID, async { 7u32 });
        let (id, result) = timeout(Duration::from_secs(2), loads.recv())
            .await
            .expect("load never finished")
            .expect("channel closed");
        loaders.complete(id, result);

        let started_again = Arc::clone(&started);
        loaders.init_loader(LOAD_ID, async move {
            started_again.fetch_add(1, Ordering::SeqCst);
            99u32
        });
        let (id, result) = timeout(Duration::from_secs(2), loads.recv())
            .await
            .expect("cached result never redelivered")
            .expect("channel closed");
        assert_eq!((id, result), (LOAD_ID, 7));
        assert_eq!(started.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn destroy_aborts_in_flight_loads() {
        let (mut loaders, mut loads) = LoaderManager::new();
        loaders.init_loader(LOAD_ID, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            1u32
        });

        loaders.destroy();
        assert!(timeout(Duration::from_millis(100), loads.recv())
            .await
            .is_err());
    }
}
