use super::PositionFilter;
use crate::landmarks::Position2D;
use nalgebra::Vector2;

/// Exponential smoothing filter
///
/// Each update moves the output `alpha` of the way toward the new target:
/// `current = current * (1 - alpha) + target * alpha`. The first sample after
/// construction or reset is passed through unchanged.
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<Vector2<f64>>,
}

impl ExponentialFilter {
    /// Create a new exponential filter
    ///
    /// # Panics
    ///
    /// Panics if alpha is not in the range (0, 1]
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, last: None }
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl PositionFilter for ExponentialFilter {
    fn apply(&mut self, target: Position2D) -> Position2D {
        let target = Vector2::from(target);
        let filtered = match self.last {
            Some(last) => last.lerp(&target, self.alpha),
            None => target,
        };

        self.last = Some(filtered);

        filtered.into()
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}
