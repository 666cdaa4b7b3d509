mod config;
mod error;
mod event;
mod interval;
mod solution;
mod trace;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use interval::SearchInterval;
pub use solution::Solution;
pub use trace::EvaluatedPoint;

use hanger_model::HangerGeometry;
use uom::si::f64::Length;
use uom::si::pressure::megapascal;

use crate::{Observer, Probe, StressOracle};

use trace::Trace;

/// Minimizes peak stress over the feasible bend radius interval using
/// golden-section search.
///
/// The search runs over `[r_min, h/2]`, where `r_min` is the radius at which
/// the manufacturing limit `r = D/2` binds. Two oracle calls seed the
/// interior points — the right-hand one first, an order replayed oracles can
/// rely on — and each narrowing iteration then costs exactly one further
/// call, reusing the carried interior evaluation. Ties between the interior
/// stresses narrow toward the lower bound. The loop stops once the interval
/// width is within `config.tolerance`.
///
/// The stress profile over the interval is assumed unimodal; upholding that
/// assumption is the caller's responsibility and is not checked here.
///
/// # Errors
///
/// Fails before the first oracle call if the geometry has no unique feasible
/// lower bound, the search range is empty, or the config is invalid. Fails
/// during the search if the oracle errors or reports a non-finite stress, or
/// if a probed radius has no feasible diameter.
pub fn minimize<O, Obs>(
    geometry: &HangerGeometry,
    oracle: &mut O,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: StressOracle,
    Obs: for<'a> Observer<Event<'a>>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let lower = geometry
        .min_feasible_radius()
        .ok_or(Error::InfeasibleGeometry {
            geometry: *geometry,
        })?;
    let upper = geometry.vertical_arm() / 2.0;
    let mut interval =
        SearchInterval::new(lower, upper).ok_or(Error::InvalidRange { lower, upper })?;

    let mut trace = Trace::new(config.duplicate_tolerance);
    let mut oracle_calls = 0usize;

    // Seed both interior points, right-hand first.
    let (left_radius, right_radius) = interval.interior();
    let mut right = probe(geometry, oracle, right_radius, &mut oracle_calls)?;
    observer.observe(&Event::Seed { point: &right });
    trace.record(right);
    let mut left = probe(geometry, oracle, left_radius, &mut oracle_calls)?;
    observer.observe(&Event::Seed { point: &left });
    trace.record(left);

    let mut best = better_of(right, left);
    let mut iterations = 0usize;

    while interval.width() > config.tolerance {
        iterations += 1;

        let fresh = if right.stress < left.stress {
            // The minimum lies in [left, upper]: drop the segment below the
            // left point and probe a fresh right-hand point; the old right
            // evaluation carries over as the new left.
            let fresh_radius = interval.narrow_toward_upper(left.radius);
            left = right;
            right = probe(geometry, oracle, fresh_radius, &mut oracle_calls)?;
            right
        } else {
            // The minimum lies in [lower, right]. Ties take this branch too,
            // keeping replays reproducible.
            let fresh_radius = interval.narrow_toward_lower(right.radius);
            right = left;
            left = probe(geometry, oracle, fresh_radius, &mut oracle_calls)?;
            left
        };

        observer.observe(&Event::Step {
            iteration: iterations,
            interval: &interval,
            point: &fresh,
        });
        trace.record(fresh);
        best = better_of(best, fresh);
    }

    Ok(Solution {
        best,
        points: trace.into_sorted(),
        iterations,
        oracle_calls,
    })
}

/// Runs the search without observation.
///
/// # Errors
///
/// Same failure modes as [`minimize`].
pub fn minimize_unobserved<O>(
    geometry: &HangerGeometry,
    oracle: &mut O,
    config: &Config,
) -> Result<Solution, Error>
where
    O: StressOracle,
{
    minimize(geometry, oracle, config, ())
}

/// Derives the diameter at `radius` and obtains its stress from the oracle.
fn probe<O: StressOracle>(
    geometry: &HangerGeometry,
    oracle: &mut O,
    radius: Length,
    oracle_calls: &mut usize,
) -> Result<EvaluatedPoint, Error> {
    let diameter = geometry
        .diameter_for_radius(radius)
        .ok_or(Error::InfeasibleRadius { radius })?;

    let candidate = Probe { radius, diameter };
    *oracle_calls += 1;
    let stress = oracle
        .evaluate(&candidate)
        .map_err(|source| Error::Oracle(Box::new(source)))?;

    if !stress.get::<megapascal>().is_finite() {
        return Err(Error::NonFiniteStress { radius, stress });
    }

    Ok(EvaluatedPoint {
        radius,
        diameter,
        stress,
    })
}

/// Prefers the lower stress; ties go to the smaller radius.
fn better_of(incumbent: EvaluatedPoint, candidate: EvaluatedPoint) -> EvaluatedPoint {
    if candidate.stress < incumbent.stress
        || (candidate.stress == incumbent.stress && candidate.radius < incumbent.radius)
    {
        candidate
    } else {
        incumbent
    }
}
