use uom::si::f64::Length;
use uom::si::length::millimeter;

/// Configuration for the golden-section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Interval width at or below which the search stops.
    pub tolerance: Length,
    /// Probes closer together than this are treated as revisits of the same
    /// point and recorded once.
    pub duplicate_tolerance: Length,
}

impl Default for Config {
    /// Reference tolerances for hanger-scale parts.
    fn default() -> Self {
        Self {
            tolerance: Length::new::<millimeter>(50.0),
            duplicate_tolerance: Length::new::<millimeter>(1e-6),
        }
    }
}

impl Config {
    /// Validates the tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if the stopping tolerance is not strictly positive
    /// and finite, or the duplicate tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        let tolerance = self.tolerance.get::<millimeter>();
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err("tolerance must be finite and strictly positive");
        }

        let duplicate = self.duplicate_tolerance.get::<millimeter>();
        if !duplicate.is_finite() || duplicate < 0.0 {
            return Err("duplicate_tolerance must be finite and non-negative");
        }

        Ok(())
    }
}
