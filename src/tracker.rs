//! Best cover found so far and the trace of its improvements.

use fxhash::FxHashSet;
use std::time::Duration;

/// A new best cover of `size` nodes, found `elapsed` after the search started.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Improvement {
    pub size: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ResultTracker {
    best: FxHashSet<usize>,
    upper_bound: usize,
    trace: Vec<Improvement>,
}

impl ResultTracker {

    /// Starts with `initial` as best cover without recording it in the trace.
    pub fn new(initial: FxHashSet<usize>) -> Self {
        ResultTracker {
            upper_bound: initial.len(),
            best: initial,
            trace: Vec::new(),
        }
    }

    /// Replaces the best cover by `cover` if it is strictly smaller and records the improvement.
    /// Returns `true` if `cover` was taken.
    pub fn offer(&mut self, cover: &FxHashSet<usize>, elapsed: Duration) -> bool {
        if cover.len() >= self.upper_bound {
            return false
        }
        self.best = cover.clone();
        self.upper_bound = cover.len();
        self.trace.push(Improvement { size: cover.len(), elapsed });
        true
    }

    /// Size of the best cover.
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    pub fn best(&self) -> &FxHashSet<usize> {
        &self.best
    }

    pub fn trace(&self) -> &[Improvement] {
        &self.trace
    }

    pub fn into_parts(self) -> (FxHashSet<usize>, Vec<Improvement>) {
        (self.best, self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_test() {
        let mut tracker = ResultTracker::new((0..5).collect());
        assert_eq!(tracker.upper_bound(), 5);
        assert!(tracker.trace().is_empty());
        assert!(!tracker.offer(&(0..5).collect(), Duration::from_millis(1)));
        assert!(tracker.offer(&vec![1, 3, 4].into_iter().collect(), Duration::from_millis(2)));
        assert!(!tracker.offer(&vec![0, 2, 4].into_iter().collect(), Duration::from_millis(3)));
        assert!(tracker.offer(&vec![2, 4].into_iter().collect(), Duration::from_millis(4)));
        assert_eq!(tracker.upper_bound(), 2);
        let (best, trace) = tracker.into_parts();
        assert_eq!(best, vec![2, 4].into_iter().collect());
        assert_eq!(trace, vec![
            Improvement { size: 3, elapsed: Duration::from_millis(2) },
            Improvement { size: 2, elapsed: Duration::from_millis(4) },
        ]);
    }
}
