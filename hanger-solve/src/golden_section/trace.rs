use uom::si::f64::{Length, Pressure};

/// A single completed oracle evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatedPoint {
    /// The bend radius that was probed.
    pub radius: Length,
    /// The cross-section diameter derived for that radius.
    pub diameter: Length,
    /// The peak stress reported by the oracle.
    pub stress: Pressure,
}

/// The discovery-ordered record of every distinct evaluation in a run.
///
/// Golden-section search naturally revisits interior points as the interval
/// endpoints move; revisits within the duplicate tolerance are not recorded
/// twice.
#[derive(Debug, Clone)]
pub(crate) struct Trace {
    duplicate_tolerance: Length,
    points: Vec<EvaluatedPoint>,
}

impl Trace {
    pub(crate) fn new(duplicate_tolerance: Length) -> Self {
        Self {
            duplicate_tolerance,
            points: Vec::new(),
        }
    }

    /// Records a point unless one within the duplicate tolerance exists.
    pub(crate) fn record(&mut self, point: EvaluatedPoint) {
        let duplicate = self
            .points
            .iter()
            .any(|existing| (existing.radius - point.radius).abs() <= self.duplicate_tolerance);

        if !duplicate {
            self.points.push(point);
        }
    }

    /// Consumes the trace, returning its points sorted ascending by radius.
    pub(crate) fn into_sorted(self) -> Vec<EvaluatedPoint> {
        let mut points = self.points;
        points.sort_by(|a, b| a.radius.value.total_cmp(&b.radius.value));
        points
    }
}
