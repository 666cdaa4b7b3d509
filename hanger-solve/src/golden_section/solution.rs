use super::EvaluatedPoint;

/// The result of a converged golden-section run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The evaluated point with the lowest stress; ties go to the smaller
    /// radius.
    pub best: EvaluatedPoint,
    /// Every distinct evaluated point, ascending by radius.
    pub points: Vec<EvaluatedPoint>,
    /// Narrowing iterations performed after the two seed evaluations.
    pub iterations: usize,
    /// Total oracle invocations, including the seeds.
    pub oracle_calls: usize,
}
