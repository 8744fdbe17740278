//! Per-slot admission locks
//!
//! Admission reads occupancy and then inserts; two concurrent bookings
//! for the same slot must not interleave between those steps. Each
//! slot (and each hotel's stay namespace) gets its own async mutex so
//! unrelated bookings never contend.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct SlotLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a restaurant/salon slot
    pub fn slot_key(business_id: &str, date: NaiveDate, time: NaiveTime) -> String {
        format!("{}/{}/{}", business_id, date, time.format("%H:%M"))
    }

    /// Key for a hotel's stay admissions. Coarse on purpose: stays
    /// overlap arbitrarily, so room assignment serializes per business.
    pub fn stay_key(business_id: &str) -> String {
        format!("{}/stays", business_id)
    }

    /// Acquire the lock for a key, creating it on first use. The
    /// returned guard is owned so it can be held across awaits.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_keys_distinguish_slots() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let a = SlotLocks::slot_key("business:b1", date, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        let b = SlotLocks::slot_key("business:b1", date, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        let c = SlotLocks::slot_key("business:b2", date, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_same_key_serializes() {
        let locks = Arc::new(SlotLocks::new());
        let in_critical = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let locks = locks.clone();
            let in_critical = in_critical.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire("business:b1/2024-07-01/19:00").await;
                let now = in_critical.fetch_add(1, Ordering::SeqCst);
                assert_eq!(now, 0, "two tasks inside the critical section");
                tokio::task::yield_now().await;
                in_critical.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
