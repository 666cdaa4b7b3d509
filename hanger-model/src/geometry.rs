use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Length, Mass, MassDensity, Volume},
    length::millimeter,
    volume::cubic_millimeter,
};

use crate::cubic;

/// Errors raised when constructing a [`HangerGeometry`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("horizontal arm length must be positive and finite")]
    InvalidHorizontalArm,

    #[error("vertical arm length must be positive and finite")]
    InvalidVerticalArm,

    #[error("material volume must be positive and finite")]
    InvalidVolume,
}

/// The fixed parameters of a hanger bracket design.
///
/// The bracket centerline runs a horizontal arm of length `b` and a vertical
/// arm of length `h`, joined by a quarter-circle bend of radius `r`. A
/// circular cross section of diameter `D` is swept along the centerline,
/// whose effective length is `2b + h + (π − 2)·r`. With the material volume
/// held fixed,
///
/// ```text
/// V = (π/4)·D²·(2b + h + (π − 2)·r)
/// ```
///
/// couples `D` to `r`, leaving the bend radius as the single free parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HangerGeometry {
    horizontal_arm: Length,
    vertical_arm: Length,
    volume: Volume,
}

impl HangerGeometry {
    /// Creates a geometry from arm lengths and the total material volume.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-positive or non-finite.
    pub fn new(
        horizontal_arm: Length,
        vertical_arm: Length,
        volume: Volume,
    ) -> Result<Self, GeometryError> {
        if !is_positive_finite(horizontal_arm.get::<millimeter>()) {
            return Err(GeometryError::InvalidHorizontalArm);
        }
        if !is_positive_finite(vertical_arm.get::<millimeter>()) {
            return Err(GeometryError::InvalidVerticalArm);
        }
        if !is_positive_finite(volume.get::<cubic_millimeter>()) {
            return Err(GeometryError::InvalidVolume);
        }

        Ok(Self {
            horizontal_arm,
            vertical_arm,
            volume,
        })
    }

    /// Creates a geometry with the volume derived from mass and density.
    ///
    /// # Errors
    ///
    /// Returns an error if an arm length or the derived volume is
    /// non-positive or non-finite.
    pub fn from_mass(
        horizontal_arm: Length,
        vertical_arm: Length,
        mass: Mass,
        density: MassDensity,
    ) -> Result<Self, GeometryError> {
        Self::new(horizontal_arm, vertical_arm, mass / density)
    }

    /// Returns the horizontal arm length `b`.
    #[must_use]
    pub fn horizontal_arm(&self) -> Length {
        self.horizontal_arm
    }

    /// Returns the vertical arm length `h`.
    #[must_use]
    pub fn vertical_arm(&self) -> Length {
        self.vertical_arm
    }

    /// Returns the material volume `V`.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Derives the cross-section diameter that spends exactly the fixed
    /// volume at the given bend radius.
    ///
    /// Inverting the volume relation gives
    /// `D = sqrt(4V / (π·(2b + h + (π − 2)·r)))`. A non-positive effective
    /// centerline length admits no physical cross section; that case is
    /// infeasible and yields `None` rather than an error.
    #[must_use]
    pub fn diameter_for_radius(&self, radius: Length) -> Option<Length> {
        let centerline = 2.0 * self.horizontal_arm + self.vertical_arm + (PI - 2.0) * radius;
        if centerline.get::<millimeter>() <= 0.0 {
            return None;
        }

        let area = 4.0 * self.volume / (PI * centerline);
        Some(area.sqrt())
    }

    /// Returns the bend radius at which the manufacturing limit `r = D/2`
    /// binds.
    ///
    /// Substituting `D = 2r` into the volume relation gives the cubic
    /// `π(π − 2)·r³ + π(2b + h)·r² − V = 0`; its positive real root is the
    /// tightest bend the fixed volume allows. Exactly one such root is
    /// expected for physical inputs; zero or several positive real roots
    /// mark the geometry as ambiguous and yield `None`.
    #[must_use]
    pub fn min_feasible_radius(&self) -> Option<Length> {
        let b = self.horizontal_arm.get::<millimeter>();
        let h = self.vertical_arm.get::<millimeter>();
        let volume = self.volume.get::<cubic_millimeter>();

        let roots = cubic::real_roots(PI * (PI - 2.0), PI * (2.0 * b + h), 0.0, -volume);
        cubic::unique_positive_root(&roots).map(Length::new::<millimeter>)
    }
}

impl fmt::Display for HangerGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b = {:.4} mm, h = {:.4} mm, V = {:.4} mm³",
            self.horizontal_arm.get::<millimeter>(),
            self.vertical_arm.get::<millimeter>(),
            self.volume.get::<cubic_millimeter>()
        )
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::kilogram;
    use uom::si::mass_density::gram_per_cubic_centimeter;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn mm3(value: f64) -> Volume {
        Volume::new::<cubic_millimeter>(value)
    }

    fn reference_geometry() -> HangerGeometry {
        HangerGeometry::new(mm(20.0), mm(30.0), mm3(50_000.0)).expect("valid geometry")
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(
            HangerGeometry::new(mm(0.0), mm(30.0), mm3(1.0)),
            Err(GeometryError::InvalidHorizontalArm)
        );
        assert_eq!(
            HangerGeometry::new(mm(20.0), mm(-1.0), mm3(1.0)),
            Err(GeometryError::InvalidVerticalArm)
        );
        assert_eq!(
            HangerGeometry::new(mm(20.0), mm(30.0), mm3(f64::NAN)),
            Err(GeometryError::InvalidVolume)
        );
    }

    #[test]
    fn derives_volume_from_mass() {
        // 2 kg of structural steel at 7.85 g/cm³ is about 254777.07 mm³.
        let geometry = HangerGeometry::from_mass(
            mm(20.0),
            mm(30.0),
            Mass::new::<kilogram>(2.0),
            MassDensity::new::<gram_per_cubic_centimeter>(7.85),
        )
        .expect("valid geometry");

        assert_relative_eq!(
            geometry.volume().get::<cubic_millimeter>(),
            254_777.070_063_694,
            epsilon = 1e-6
        );
    }

    #[test]
    fn diameter_matches_volume_relation() {
        let geometry = reference_geometry();
        let radius = mm(10.0);

        let diameter = geometry
            .diameter_for_radius(radius)
            .expect("feasible radius");

        // Recompute the volume from the derived diameter.
        let centerline = 2.0 * 20.0 + 30.0 + (PI - 2.0) * 10.0;
        let d = diameter.get::<millimeter>();
        assert_relative_eq!(
            PI / 4.0 * d * d * centerline,
            50_000.0,
            epsilon = 1e-9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn diameter_is_strictly_decreasing_in_radius() {
        let geometry = reference_geometry();

        let mut previous = f64::INFINITY;
        for step in 0..50 {
            let radius = mm(1.0 + f64::from(step));
            let diameter = geometry
                .diameter_for_radius(radius)
                .expect("feasible radius")
                .get::<millimeter>();

            assert!(
                diameter < previous,
                "diameter {diameter} did not decrease at r = {radius:?}"
            );
            previous = diameter;
        }
    }

    #[test]
    fn non_positive_centerline_is_infeasible() {
        let geometry = reference_geometry();

        // A radius negative enough to drive 2b + h + (π−2)r below zero.
        let limit = -(2.0 * 20.0 + 30.0) / (PI - 2.0);
        assert!(geometry.diameter_for_radius(mm(limit - 1.0)).is_none());
        assert!(geometry.diameter_for_radius(mm(limit - 1e-6)).is_none());
    }

    #[test]
    fn min_feasible_radius_satisfies_manufacturing_cubic() {
        let geometry = reference_geometry();

        let radius = geometry
            .min_feasible_radius()
            .expect("unique positive root")
            .get::<millimeter>();

        let residual =
            PI * (PI - 2.0) * radius.powi(3) + PI * 70.0 * radius.powi(2) - 50_000.0;
        assert!(
            residual.abs() <= 1e-6,
            "residual {residual} exceeds tolerance at r = {radius}"
        );
    }

    #[test]
    fn min_feasible_radius_equals_half_its_diameter() {
        let geometry = reference_geometry();

        let radius = geometry.min_feasible_radius().expect("unique positive root");
        let diameter = geometry
            .diameter_for_radius(radius)
            .expect("feasible radius");

        assert_relative_eq!(
            diameter.get::<millimeter>(),
            2.0 * radius.get::<millimeter>(),
            epsilon = 1e-9
        );
    }
}
