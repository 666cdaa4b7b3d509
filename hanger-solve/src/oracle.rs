use uom::si::f64::{Length, Pressure};

/// A candidate geometry handed to the oracle: the bend radius to probe and
/// the cross-section diameter derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub radius: Length,
    pub diameter: Length,
}

/// An external capability that measures peak stress for a candidate
/// geometry.
///
/// Implementations may prompt a human operator to run a simulation, replay a
/// recorded response sequence, or compute the value directly. The driver
/// blocks on [`evaluate`] with no timeout; a human-paced oracle is expected
/// to take arbitrarily long.
///
/// The contract is to return a finite stress. Recovering from invalid
/// intermediate input — an operator typo, say — is the oracle's own concern;
/// the driver never retries a call.
///
/// Closures of type `FnMut(&Probe) -> Result<Pressure, E>` implement this
/// trait automatically, which keeps scripted test oracles lightweight.
///
/// [`evaluate`]: StressOracle::evaluate
pub trait StressOracle {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Measures the peak stress for the given candidate geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if no measurement can be obtained at all.
    fn evaluate(&mut self, probe: &Probe) -> Result<Pressure, Self::Error>;
}

/// Blanket implementation for oracle closures.
impl<F, E> StressOracle for F
where
    F: FnMut(&Probe) -> Result<Pressure, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&mut self, probe: &Probe) -> Result<Pressure, Self::Error> {
        self(probe)
    }
}
