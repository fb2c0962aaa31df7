use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::RoastCategory;

/// Counters for roast requests
#[derive(Debug, Default)]
pub struct RoastStats {
    /// Roasts delivered
    pub total_resolved: AtomicU64,
    /// Requests rejected for a blank name
    pub blank_names: AtomicU64,
    pub light: AtomicU64,
    pub medium: AtomicU64,
    pub extra_spicy: AtomicU64,
}

impl RoastStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolved(&self, category: RoastCategory) {
        self.total_resolved.fetch_add(1, Ordering::Relaxed);
        let counter = match category {
            RoastCategory::Light => &self.light,
            RoastCategory::Medium => &self.medium,
            RoastCategory::ExtraSpicy => &self.extra_spicy,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blank_name(&self) {
        self.blank_names.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RoastStatsSnapshot {
        RoastStatsSnapshot {
            total_resolved: self.total_resolved.load(Ordering::Relaxed),
            blank_names: self.blank_names.load(Ordering::Relaxed),
            light: self.light.load(Ordering::Relaxed),
            medium: self.medium.load(Ordering::Relaxed),
            extra_spicy: self.extra_spicy.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of roast statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoastStatsSnapshot {
    pub total_resolved: u64,
    pub blank_names: u64,
    pub light: u64,
    pub medium: u64,
    pub extra_spicy: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let stats = RoastStats::new();
        stats.record_resolved(RoastCategory::Light);
        stats.record_resolved(RoastCategory::ExtraSpicy);
        stats.record_resolved(RoastCategory::ExtraSpicy);
        stats.record_blank_name();

        let snap = stats.snapshot();
        assert_eq!(snap.total_resolved, 3);
        assert_eq!(snap.blank_names, 1);
        assert_eq!(snap.light, 1);
        assert_eq!(snap.medium, 0);
        assert_eq!(snap.extra_spicy, 2);
    }
}
