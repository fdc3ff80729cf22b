use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Sequential,
    Parallel,
}

impl GenerationMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one engine run.
///
/// The produced count is always `points.len()` and never exceeds the requested
/// count. A short batch means the attempt budget ran out first.
#[derive(Debug, Clone)]
pub struct Batch {
    mode: GenerationMode,
    points: Vec<Point>,
    requested_count: usize,
    attempts: usize,
    workers: usize,
    elapsed: Duration,
}

impl Batch {
    pub(crate) fn new(
        mode: GenerationMode,
        points: Vec<Point>,
        requested_count: usize,
        attempts: usize,
        workers: usize,
        elapsed: Duration,
    ) -> Self {
        debug_assert!(points.len() <= requested_count);

        Self {
            mode,
            points,
            requested_count,
            attempts,
            workers,
            elapsed,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    #[must_use]
    pub fn produced_count(&self) -> usize {
        self.points.len()
    }

    /// Sampling tries consumed, successful or not. Never above the engine's budget.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_short(&self) -> bool {
        self.produced_count() < self.requested_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn point(re: f64) -> Point {
        Point {
            z: Complex::new(re, 0.0),
            w: Complex::new(0.0, re),
            color: String::from("hsla(180.00, 100%, 60%, 0.8)"),
        }
    }

    #[test]
    fn test_produced_count_tracks_points() {
        let batch = Batch::new(
            GenerationMode::Sequential,
            vec![point(1.0), point(2.0)],
            5,
            30,
            1,
            Duration::from_millis(3),
        );

        assert_eq!(batch.produced_count(), 2);
        assert_eq!(batch.requested_count(), 5);
        assert!(batch.is_short());
    }

    #[test]
    fn test_full_batch_is_not_short() {
        let batch = Batch::new(
            GenerationMode::Parallel,
            vec![point(1.0)],
            1,
            1,
            1,
            Duration::ZERO,
        );

        assert!(!batch.is_short());
        assert_eq!(batch.into_points().len(), 1);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(GenerationMode::Sequential.to_string(), "sequential");
        assert_eq!(GenerationMode::Parallel.to_string(), "parallel");
        assert_eq!(
            serde_json::to_string(&GenerationMode::Parallel).unwrap(),
            r#""parallel""#
        );
    }
}
