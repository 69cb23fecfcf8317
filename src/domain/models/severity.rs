use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityKey {
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityKey {
    pub const ALL: [SeverityKey; 4] = [
        SeverityKey::Critical,
        SeverityKey::High,
        SeverityKey::Medium,
        SeverityKey::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeverityKey::Critical => "Critical",
            SeverityKey::High => "High",
            SeverityKey::Medium => "Medium",
            SeverityKey::Low => "Low",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            SeverityKey::Critical => "critical",
            SeverityKey::High => "high",
            SeverityKey::Medium => "medium",
            SeverityKey::Low => "low",
        }
    }
}

/// Vulnerability count per severity. Missing keys keep the demo counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityCounts {
    pub fn get(&self, key: SeverityKey) -> u32 {
        match key {
            SeverityKey::Critical => self.critical,
            SeverityKey::High => self.high,
            SeverityKey::Medium => self.medium,
            SeverityKey::Low => self.low,
        }
    }

    pub fn set(&mut self, key: SeverityKey, value: u32) {
        match key {
            SeverityKey::Critical => self.critical = value,
            SeverityKey::High => self.high = value,
            SeverityKey::Medium => self.medium = value,
            SeverityKey::Low => self.low = value,
        }
    }

    pub fn total(&self) -> u32 {
        SeverityKey::ALL.iter().map(|key| self.get(*key)).sum()
    }

    pub fn max(&self) -> u32 {
        SeverityKey::ALL.iter().map(|key| self.get(*key)).max().unwrap_or(0)
    }

    /// Bar height for `key` as a percentage of the tallest bar.
    pub fn percent_of_max(&self, key: SeverityKey) -> f64 {
        match self.max() {
            0 => 0.0,
            max => f64::from(self.get(key)) * 100.0 / f64::from(max),
        }
    }
}

impl Default for SeverityCounts {
    fn default() -> Self {
        Self {
            critical: 12,
            high: 28,
            medium: 41,
            low: 17,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveritySnapshot {
    pub ts: DateTime<Utc>,
    pub counts: SeverityCounts,
}

/// Severity slice of the client store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeverityState {
    pub counts: SeverityCounts,
    pub history: Vec<SeveritySnapshot>,
}

impl SeverityState {
    pub fn set_counts(&mut self, counts: SeverityCounts) {
        for key in SeverityKey::ALL {
            self.set_count(key, counts.get(key));
        }
    }

    pub fn set_count(&mut self, key: SeverityKey, value: u32) {
        self.counts.set(key, value);
    }

    pub fn push_snapshot(&mut self, ts: DateTime<Utc>, counts: SeverityCounts) {
        self.history.push(SeveritySnapshot { ts, counts });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let counts = SeverityCounts::default();
        assert_eq!(counts.get(SeverityKey::Critical), 12);
        assert_eq!(counts.get(SeverityKey::Medium), 41);
        assert_eq!(counts.total(), 98);
        assert_eq!(counts.max(), 41);
    }

    #[test]
    fn test_set_counts_replaces_every_key() {
        let mut state = SeverityState::default();
        let counts = SeverityCounts {
            critical: 1,
            high: 2,
            medium: 3,
            low: 4,
        };
        state.set_counts(counts);
        assert_eq!(state.counts, counts);
        assert_eq!(state.counts.total(), 10);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_set_single_count() {
        let mut state = SeverityState::default();
        state.set_count(SeverityKey::Low, 3);
        assert_eq!(state.counts.low, 3);
        assert_eq!(state.counts.high, 28);
    }

    #[test]
    fn test_percent_of_max() {
        let mut counts = SeverityCounts::default();
        assert_eq!(counts.percent_of_max(SeverityKey::Medium), 100.0);
        for key in SeverityKey::ALL {
            counts.set(key, 0);
        }
        assert_eq!(counts.percent_of_max(SeverityKey::Critical), 0.0);
    }

    #[test]
    fn test_push_snapshot_keeps_order() {
        let mut state = SeverityState::default();
        let first = Utc::now();
        state.push_snapshot(first, state.counts);
        state.set_count(SeverityKey::Critical, 0);
        state.push_snapshot(Utc::now(), state.counts);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].ts, first);
        assert_eq!(state.history[1].counts.critical, 0);
    }
}
