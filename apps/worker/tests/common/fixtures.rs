//! Test fixtures for worker integration tests

use std::future::Future;
use std::time::Duration;

use resonance_shared_config::PopularitySyncConfig;
use resonance_worker::EntityRef;
use uuid::Uuid;

/// `n` entities named `"{prefix} {i}"`
pub fn entities(prefix: &str, n: usize) -> Vec<EntityRef> {
    (0..n)
        .map(|i| EntityRef::new(Uuid::new_v4(), format!("{} {}", prefix, i)))
        .collect()
}

/// Sync pacing short enough for tests
pub fn fast_config() -> PopularitySyncConfig {
    PopularitySyncConfig::with_delay_ms(1)
}

/// Poll `condition` until it holds or `timeout` elapses
pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

/// Await a future, failing the test if it takes longer than five seconds
pub async fn within_timeout<T>(future: impl Future<Output = T>) -> T {
    tokio::time::timeout(Duration::from_secs(5), future)
        .await
        .expect("operation timed out")
}
