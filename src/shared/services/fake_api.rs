//! In-memory mock of the scan backend.
//!
//! Simulates network latency and keeps started scans for the lifetime of the
//! app, so a refresh after "Start Scan" still lists the new entry.

use crate::config::ApiLatency;
use crate::domain::models::{Scan, ScanStatus};
use crate::shared::errors::{AppError, Result};
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone)]
pub struct FakeScanApi {
    scans: Arc<Mutex<Vec<Scan>>>,
    latency: ApiLatency,
}

impl PartialEq for FakeScanApi {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.scans, &other.scans)
    }
}

impl FakeScanApi {
    pub fn new(latency: ApiLatency) -> Self {
        Self::with_scans(latency, seed_scans())
    }

    pub fn with_scans(latency: ApiLatency, scans: Vec<Scan>) -> Self {
        Self {
            scans: Arc::new(Mutex::new(scans)),
            latency,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Scan>>> {
        self.scans
            .lock()
            .map_err(|_| AppError::Unavailable("scan store poisoned".into()))
    }

    pub async fn list_scans(&self) -> Result<Vec<Scan>> {
        simulate_latency(self.latency.list_ms).await;
        Ok(self.lock()?.clone())
    }

    pub async fn start_scan(&self, name: &str) -> Result<Scan> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("scan name is required".into()));
        }
        simulate_latency(self.latency.start_ms).await;

        let scan = Scan {
            id: next_scan_id(),
            name: name.to_string(),
            status: ScanStatus::Queued,
            started_at: Utc::now(),
        };
        self.lock()?.insert(0, scan.clone());
        Ok(scan)
    }
}

fn seed_scans() -> Vec<Scan> {
    let now = Utc::now();
    vec![
        Scan {
            id: "S-1001".to_string(),
            name: "Weekly PCI Scan".to_string(),
            status: ScanStatus::Completed,
            started_at: now - Duration::days(1),
        },
        Scan {
            id: "S-1002".to_string(),
            name: "Quick check".to_string(),
            status: ScanStatus::Running,
            started_at: now - Duration::minutes(10),
        },
    ]
}

/// `S-` followed by a number in 1000..=9999.
fn next_scan_id() -> String {
    let n = 1000 + (Uuid::new_v4().as_u128() % 9000);
    format!("S-{}", n)
}

async fn simulate_latency(ms: u32) {
    if ms == 0 {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn api() -> FakeScanApi {
        FakeScanApi::new(ApiLatency::NONE)
    }

    #[test]
    fn test_seeded_scans() {
        let scans = block_on(api().list_scans()).unwrap();
        let ids: Vec<_> = scans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S-1001", "S-1002"]);
        assert_eq!(scans[0].status, ScanStatus::Completed);
        assert!(scans[1].started_at > scans[0].started_at);
    }

    #[test]
    fn test_start_scan_is_prepended_and_shared() {
        let api = api();
        let handle = api.clone();
        let scan = block_on(api.start_scan("  Quick PCI Scan ")).unwrap();
        assert_eq!(scan.name, "Quick PCI Scan");
        assert_eq!(scan.status, ScanStatus::Queued);

        let number: u32 = scan.id.trim_start_matches("S-").parse().unwrap();
        assert!((1000..=9999).contains(&number));

        let scans = block_on(handle.list_scans()).unwrap();
        assert_eq!(scans.len(), 3);
        assert_eq!(scans[0], scan);
    }

    #[test]
    fn test_blank_name_rejected() {
        let api = api();
        let err = block_on(api.start_scan("   ")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(block_on(api.list_scans()).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let api = FakeScanApi::with_scans(
            ApiLatency {
                list_ms: 20,
                start_ms: 0,
            },
            Vec::new(),
        );
        let started = std::time::Instant::now();
        let scans = api.list_scans().await.unwrap();
        assert!(scans.is_empty());
        assert!(started.elapsed() >= std::time::Duration::from_millis(20));
    }
}
