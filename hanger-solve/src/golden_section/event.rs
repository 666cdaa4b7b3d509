use super::{EvaluatedPoint, SearchInterval};

/// Event emitted by the golden-section driver for each oracle evaluation.
#[derive(Debug)]
pub enum Event<'a> {
    /// One of the two interior seed evaluations taken before the narrowing
    /// loop starts.
    Seed {
        /// The freshly evaluated interior point.
        point: &'a EvaluatedPoint,
    },
    /// A fresh interior evaluation taken by a narrowing iteration.
    Step {
        /// Iteration counter (1-based within the narrowing loop).
        iteration: usize,
        /// The interval after this iteration's narrowing.
        interval: &'a SearchInterval,
        /// The freshly evaluated interior point.
        point: &'a EvaluatedPoint,
    },
}

impl Event<'_> {
    /// Returns the evaluated point.
    #[must_use]
    pub fn point(&self) -> &EvaluatedPoint {
        match self {
            Event::Seed { point } | Event::Step { point, .. } => point,
        }
    }
}
