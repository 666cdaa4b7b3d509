use std::error::Error as StdError;

use hanger_model::HangerGeometry;
use thiserror::Error;
use uom::si::f64::{Length, Pressure};
use uom::si::length::millimeter;
use uom::si::pressure::megapascal;

/// Errors that can occur during a golden-section run.
///
/// The first three variants are raised before any oracle call is made, so a
/// misconfigured run never wastes an external evaluation.
#[derive(Debug, Error)]
pub enum Error {
    /// The manufacturing-limit cubic has no unique positive real root.
    #[error("no unique feasible lower bound for {geometry}")]
    InfeasibleGeometry { geometry: HangerGeometry },

    /// The upper bound `h/2` does not exceed the feasible lower bound.
    #[error(
        "invalid search range: upper bound {:.4} mm does not exceed lower bound {:.4} mm",
        .upper.get::<millimeter>(),
        .lower.get::<millimeter>()
    )]
    InvalidRange { lower: Length, upper: Length },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// A probed radius leaves no volume for a physical cross section.
    #[error("no feasible diameter at r = {:.4} mm", .radius.get::<millimeter>())]
    InfeasibleRadius { radius: Length },

    /// The injected oracle failed to produce a measurement.
    #[error("stress oracle failed")]
    Oracle(#[source] Box<dyn StdError + Send + Sync>),

    /// The oracle reported a stress outside its finite-number contract.
    #[error(
        "non-finite stress {} MPa reported at r = {:.4} mm",
        .stress.get::<megapascal>(),
        .radius.get::<millimeter>()
    )]
    NonFiniteStress { radius: Length, stress: Pressure },
}
