//! Bounded history of readings for the chart.

use std::collections::VecDeque;

use crate::reading::Reading;

/// Fixed-capacity FIFO of elapsed times paired with forces
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    /// Elapsed seconds since the anchor
    pub timestamps: VecDeque<f64>,
    /// Forces in newtons
    pub force_values: VecDeque<f64>,
}

impl History {
    /// Create an empty history holding at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            timestamps: VecDeque::with_capacity(capacity),
            force_values: VecDeque::with_capacity(capacity),
        }
    }

    /// Add a reading, evicting the oldest point when full
    pub fn push(&mut self, reading: &Reading) {
        if self.capacity == 0 {
            return;
        }
        if self.timestamps.len() >= self.capacity {
            self.timestamps.pop_front();
            self.force_values.pop_front();
        }
        self.timestamps.push_back(reading.elapsed_time);
        self.force_values.push_back(reading.force);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Elapsed time of the newest point
    pub fn latest_elapsed(&self) -> Option<f64> {
        self.timestamps.back().copied()
    }

    /// (min, max) of the stored forces
    pub fn force_range(&self) -> Option<(f64, f64)> {
        if self.force_values.is_empty() {
            return None;
        }
        let min = self.force_values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.force_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Chart points as (elapsed, force) pairs
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.timestamps
            .iter()
            .zip(self.force_values.iter())
            .map(|(t, f)| (*t, *f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn reading(elapsed_time: f64, force: f64) -> Reading {
        Reading {
            timestamp: Local::now(),
            elapsed_time,
            force,
        }
    }

    #[test]
    fn test_push_and_points() {
        let mut history = History::new(5);
        history.push(&reading(0.0, 1.0));
        history.push(&reading(0.1, 2.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.points(), vec![(0.0, 1.0), (0.1, 2.0)]);
        assert_eq!(history.latest_elapsed(), Some(0.1));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut history = History::new(200);
        for i in 0..1000 {
            history.push(&reading(i as f64 * 0.1, i as f64));
            assert!(history.len() <= 200);
        }
        assert_eq!(history.len(), 200);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut history = History::new(3);
        for i in 0..3 {
            history.push(&reading(i as f64, i as f64 * 10.0));
        }
        history.push(&reading(3.0, 30.0));
        assert_eq!(history.points(), vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);

        history.push(&reading(4.0, 40.0));
        assert_eq!(history.timestamps.front(), Some(&2.0));
        assert_eq!(history.force_values.front(), Some(&20.0));
    }

    #[test]
    fn test_force_range() {
        let mut history = History::new(10);
        assert_eq!(history.force_range(), None);
        history.push(&reading(0.0, 4.0));
        history.push(&reading(1.0, -2.5));
        history.push(&reading(2.0, 3.0));
        assert_eq!(history.force_range(), Some((-2.5, 4.0)));
    }
}
