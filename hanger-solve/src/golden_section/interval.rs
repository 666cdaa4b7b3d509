use uom::si::f64::Length;

/// The golden ratio, (1 + √5) / 2.
const GOLDEN_RATIO: f64 = 1.618_033_988_749_894_8;

/// The radius interval being narrowed by the search.
///
/// Interior probe points always sit at the golden-ratio split of the current
/// bounds, `left = upper − width/φ` and `right = lower + width/φ`, so that
/// `lower < left < right < upper` and each narrowing step can reuse one of
/// the two previous interior evaluations. The interval only ever shrinks;
/// each narrowing multiplies its width by exactly 1/φ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchInterval {
    lower: Length,
    upper: Length,
}

impl SearchInterval {
    /// Creates the interval, requiring `lower < upper`.
    pub(crate) fn new(lower: Length, upper: Length) -> Option<Self> {
        (lower < upper).then_some(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> Length {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> Length {
        self.upper
    }

    /// Returns the current interval width.
    #[must_use]
    pub fn width(&self) -> Length {
        self.upper - self.lower
    }

    /// Returns the interior probe radii `(left, right)`.
    #[must_use]
    pub fn interior(&self) -> (Length, Length) {
        let step = self.width() / GOLDEN_RATIO;
        (self.upper - step, self.lower + step)
    }

    /// Narrows to `[new_lower, upper]` and returns the fresh right-hand
    /// interior radius; the caller carries the old right evaluation over to
    /// the left.
    pub(crate) fn narrow_toward_upper(&mut self, new_lower: Length) -> Length {
        self.lower = new_lower;
        self.interior().1
    }

    /// Narrows to `[lower, new_upper]` and returns the fresh left-hand
    /// interior radius; the caller carries the old left evaluation over to
    /// the right.
    pub(crate) fn narrow_toward_lower(&mut self, new_upper: Length) -> Length {
        self.upper = new_upper;
        self.interior().0
    }
}
