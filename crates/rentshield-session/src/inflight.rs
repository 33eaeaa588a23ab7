/// Busy flag and generation counter for a view that issues one model call at a time.
///
/// Each submission takes a fresh generation. A resolution is only applied to
/// the view when its generation is still the current one and the view is
/// still waiting for it.
#[derive(Debug, Default)]
pub(crate) struct Inflight {
    generation: u64,
    busy: bool,
}

impl Inflight {
    /// Start a submission. `None` while a previous one is still outstanding.
    pub(crate) fn start(&mut self) -> Option<u64> {
        if self.busy {
            return None;
        }
        self.generation += 1;
        self.busy = true;
        Some(self.generation)
    }

    /// Settle a submission. Returns whether it was the one the view waits for.
    pub(crate) fn settle(&mut self, generation: u64) -> bool {
        if self.busy && generation == self.generation {
            self.busy = false;
            true
        } else {
            false
        }
    }

    /// Stop waiting for whatever is outstanding.
    pub(crate) fn invalidate(&mut self) {
        if self.busy {
            self.generation += 1;
            self.busy = false;
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_rejected_while_busy() {
        let mut f = Inflight::default();
        let g = f.start().unwrap();
        assert!(f.start().is_none());
        assert!(f.settle(g));
        assert!(f.start().is_some());
    }

    #[test]
    fn invalidated_generation_is_stale() {
        let mut f = Inflight::default();
        let old = f.start().unwrap();
        f.invalidate();
        assert!(!f.is_busy());
        let new = f.start().unwrap();
        assert_ne!(old, new);
        assert!(!f.settle(old));
        assert!(f.is_busy());
        assert!(f.settle(new));
    }

    #[test]
    fn settle_twice_is_ignored() {
        let mut f = Inflight::default();
        let g = f.start().unwrap();
        assert!(f.settle(g));
        assert!(!f.settle(g));
    }
}
