use std::collections::VecDeque;

use rentshield_core::ScanHistoryItem;

/// Completed scans, most recent first.
#[derive(Debug, Default)]
pub struct HistoryLog {
    items: VecDeque<ScanHistoryItem>,
}

impl HistoryLog {
    pub(crate) fn record(&mut self, item: ScanHistoryItem) -> &ScanHistoryItem {
        self.items.push_front(item);
        &self.items[0]
    }

    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanHistoryItem> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&ScanHistoryItem> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rentshield_core::{BiddingVerdict, ScanOutcome};

    fn item(evidence: &str) -> ScanHistoryItem {
        let outcome = ScanOutcome::Bidding(BiddingVerdict {
            is_illegal: true,
            evidence: evidence.to_string(),
        });
        ScanHistoryItem::record(&outcome, Utc::now())
    }

    #[test]
    fn reads_newest_first() {
        let mut log = HistoryLog::default();
        log.record(item("A"));
        log.record(item("B"));
        log.record(item("C"));

        let order: Vec<&str> = log.iter().map(|i| i.summary()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
        assert_eq!(log.latest().unwrap().summary(), "C");
    }

    #[test]
    fn clear_empties_log() {
        let mut log = HistoryLog::default();
        log.record(item("A"));
        log.record(item("B"));
        assert_eq!(log.clear(), 2);
        assert!(log.is_empty());
    }
}
