//! Position smoothing filters for the cursor.
//!
//! Filters run once per tick on normalized fingertip positions. The same ratio
//! is applied on every update regardless of the interval between frames.

/// Exponential filter for responsive smoothing
pub mod exponential;

use crate::{constants::DEFAULT_SMOOTHING_FACTOR, landmarks::Position2D, Result};

/// Trait for all cursor position filters
pub trait PositionFilter: Send + Sync {
    /// Apply filter to a new target position, returning the smoothed position
    fn apply(&mut self, target: Position2D) -> Position2D;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PositionFilter for NoFilter {
    fn apply(&mut self, target: Position2D) -> Position2D {
        target
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Create a position filter by type name
///
/// Accepts `none`, `exponential`, or `exponential:<alpha>`.
///
/// # Errors
///
/// Returns `FilterError` for unknown names or out-of-range parameters.
pub fn create_filter(filter_type: &str) -> Result<Box<dyn PositionFilter>> {
    let lowered = filter_type.to_lowercase();
    let mut parts = lowered.split(':');
    let name = parts.next().unwrap_or_default();
    let param = parts.next();

    if parts.next().is_some() {
        return Err(crate::Error::FilterError(format!("Too many parameters: {filter_type}")));
    }

    match (name, param) {
        ("none" | "nofilter", None) => Ok(Box::new(NoFilter)),
        ("exponential", None) => Ok(Box::new(exponential::ExponentialFilter::new(
            DEFAULT_SMOOTHING_FACTOR,
        ))),
        ("exponential", Some(alpha)) => {
            let alpha: f64 = alpha
                .parse()
                .map_err(|_| {
                    crate::Error::FilterError(format!("Invalid smoothing factor: {alpha}"))
                })?;
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(crate::Error::FilterError(format!(
                    "Smoothing factor must be in (0, 1), got {alpha}"
                )));
            }
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)))
        }
        _ => Err(crate::Error::FilterError(format!("Unknown filter type: {filter_type}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter() {
        let mut filter = NoFilter;
        let out = filter.apply(Position2D::new(0.1, 0.2));
        assert_eq!(out, Position2D::new(0.1, 0.2));
    }

    #[test]
    fn test_create_filter() {
        assert!(create_filter("none").is_ok());
        assert!(create_filter("exponential").is_ok());
        assert!(create_filter("Exponential:0.9").is_ok());
        assert!(create_filter("exponential:1.0").is_err());
        assert!(create_filter("exponential:abc").is_err());
        assert!(create_filter("exponential:0.5:1").is_err());
        assert!(create_filter("none:3").is_err());
        assert!(create_filter("unknown").is_err());
    }
}
