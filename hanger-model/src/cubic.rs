//! Closed-form real-root extraction for cubic polynomials.
//!
//! The solver works on the depressed cubic and branches on its discriminant:
//! one real root (Cardano's formula), three distinct real roots (the
//! trigonometric form), or repeated roots at the discriminant-zero boundary.
//! The boundary itself is classified with an explicit tolerance, since a
//! discriminant that is algebraically zero rarely lands on zero in floating
//! point.

use std::f64::consts::PI;

/// Relative band around zero inside which a discriminant is treated as zero.
const DISCRIMINANT_TOLERANCE: f64 = 1e-9;

/// Coefficient magnitude below which a leading term is treated as absent.
const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Relative spacing below which two computed roots are merged into one.
const ROOT_MERGE_TOLERANCE: f64 = 1e-9;

/// Returns the real roots of `a·x³ + b·x² + c·x + d = 0` in ascending order.
///
/// Repeated roots are reported once. A degenerate leading coefficient falls
/// back to the quadratic and linear formulas, so the function is total over
/// finite coefficients.
#[must_use]
pub fn real_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a.abs() <= DEGENERATE_TOLERANCE {
        return quadratic_roots(b, c, d);
    }

    // Normalize to x³ + B·x² + C·x + D, then depress with x = t − B/3.
    let b_n = b / a;
    let c_n = c / a;
    let d_n = d / a;
    let shift = b_n / 3.0;
    let p = c_n - b_n * b_n / 3.0;
    let q = 2.0 * b_n.powi(3) / 27.0 - b_n * c_n / 3.0 + d_n;

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let discriminant = half_q * half_q + third_p.powi(3);
    let scale = (half_q * half_q)
        .max(third_p.powi(3).abs())
        .max(f64::MIN_POSITIVE);

    let mut roots = if discriminant > DISCRIMINANT_TOLERANCE * scale {
        // One real root; the other two form a conjugate complex pair.
        let sqrt_disc = discriminant.sqrt();
        let t = (-half_q + sqrt_disc).cbrt() + (-half_q - sqrt_disc).cbrt();
        vec![t - shift]
    } else if discriminant < -DISCRIMINANT_TOLERANCE * scale {
        // Three distinct real roots, via the trigonometric form.
        let m = (-third_p).sqrt();
        let angle = (-half_q / m.powi(3)).clamp(-1.0, 1.0).acos();
        (0..3)
            .map(|k| 2.0 * m * ((angle + 2.0 * PI * f64::from(k)) / 3.0).cos() - shift)
            .collect()
    } else if half_q.abs() <= DEGENERATE_TOLERANCE {
        // Triple root.
        vec![-shift]
    } else {
        // Zero discriminant: a simple root and a double root.
        let u = (-half_q).cbrt();
        vec![2.0 * u - shift, -u - shift]
    };

    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|x, y| (*x - *y).abs() <= ROOT_MERGE_TOLERANCE * (1.0 + y.abs()));
    roots
}

/// Returns the single strictly positive root, if exactly one exists.
///
/// Zero positive roots and more than one positive root both yield `None`;
/// callers that expect a unique physical solution must not guess between
/// ambiguous candidates.
#[must_use]
pub fn unique_positive_root(roots: &[f64]) -> Option<f64> {
    let mut positive = roots.iter().copied().filter(|root| *root > 0.0);
    match (positive.next(), positive.next()) {
        (Some(root), None) => Some(root),
        _ => None,
    }
}

/// Real roots of `a·x² + b·x + c = 0`, ascending, handling degenerate `a`.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() <= DEGENERATE_TOLERANCE {
        if b.abs() <= DEGENERATE_TOLERANCE {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_disc = discriminant.sqrt();
    let mut roots = vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)];
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|x, y| (*x - *y).abs() <= ROOT_MERGE_TOLERANCE * (1.0 + y.abs()));
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_real_root() {
        // x³ − 2 = 0 has one real root at ∛2.
        let roots = real_roots(1.0, 0.0, 0.0, -2.0);

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.259_921_049_894_873_2, epsilon = 1e-12);
    }

    #[test]
    fn three_distinct_real_roots() {
        // (x − 1)(x − 2)(x + 3) = x³ − 7x + 6
        let roots = real_roots(1.0, 0.0, -7.0, 6.0);

        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], -3.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_discriminant_reports_double_root_once() {
        // (x − 1)²(x + 2) = x³ − 3x + 2 has a zero discriminant.
        let roots = real_roots(1.0, 0.0, -3.0, 2.0);

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn triple_root() {
        // (x − 1)³ = x³ − 3x² + 3x − 1
        let roots = real_roots(1.0, -3.0, 3.0, -1.0);

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_leading_coefficient_falls_back_to_quadratic() {
        let roots = real_roots(0.0, 1.0, 0.0, -4.0);

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -2.0);
        assert_relative_eq!(roots[1], 2.0);
    }

    #[test]
    fn degenerate_quadratic_falls_back_to_linear() {
        let roots = real_roots(0.0, 0.0, 2.0, -6.0);

        assert_eq!(roots, vec![3.0]);
    }

    #[test]
    fn complex_pair_without_real_part_is_empty() {
        // x² + 1 = 0 has no real roots.
        let roots = real_roots(0.0, 1.0, 0.0, 1.0);

        assert!(roots.is_empty());
    }

    #[test]
    fn unique_positive_root_accepts_exactly_one() {
        assert_eq!(unique_positive_root(&[-3.0, -1.0, 2.0]), Some(2.0));
        assert_eq!(unique_positive_root(&[-3.0]), None);
        assert_eq!(unique_positive_root(&[1.0, 2.0]), None);
        assert_eq!(unique_positive_root(&[]), None);
    }

    #[test]
    fn manufacturing_limit_cubic_root_satisfies_polynomial() {
        // π(π−2)·r³ + π(2·20 + 30)·r² − 50000 = 0
        let a = PI * (PI - 2.0);
        let b = PI * 70.0;
        let d = -50_000.0;

        let roots = real_roots(a, b, 0.0, d);
        let root = unique_positive_root(&roots).expect("one positive root");

        let residual = a * root.powi(3) + b * root.powi(2) + d;
        assert!(
            residual.abs() <= 1e-6,
            "residual {residual} exceeds tolerance at r = {root}"
        );
    }
}
