use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sqlx::types::Uuid;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-professional booking locks.
///
/// The slot validator is a pure check over a snapshot; two concurrent
/// requests could both read a free calendar and both insert. Holding
/// the professional's lock across the read-check-write sequence makes
/// the decision atomic with the write that commits it. This covers a
/// single process; multi-instance deployments additionally need a
/// database exclusion constraint on the interval.
#[derive(Default)]
pub struct ProfessionalLocks {
    inner: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl ProfessionalLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, professional_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut registry = self
                .inner
                .lock()
                .expect("professional lock registry poisoned");
            registry.entry(professional_id).or_default().clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_professional_serializes() {
        let locks = ProfessionalLocks::new();
        let pro = Uuid::new_v4();

        let guard = locks.acquire(pro).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(pro)).await;
        assert!(second.is_err(), "second acquire should block while held");

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.acquire(pro)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn different_professionals_do_not_block_each_other() {
        let locks = ProfessionalLocks::new();

        let _guard = locks.acquire(Uuid::new_v4()).await;
        let other = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(Uuid::new_v4()),
        )
        .await;
        assert!(other.is_ok());
    }
}
