//! Golden-section search for the stress-minimizing bend radius of a hanger
//! bracket.
//!
//! Peak stress at a candidate radius is not computable in closed form; it
//! comes from an external finite-element evaluation. The driver in
//! [`golden_section`] therefore consumes two injected capabilities: a
//! [`StressOracle`] that reports the measured stress for each candidate
//! geometry, and an [`Observer`] that watches progress without steering it.
//! The driver owns the shrinking search interval and the trace of every
//! distinct evaluation.

pub mod golden_section;
mod observe;
mod oracle;

pub use observe::Observer;
pub use oracle::{Probe, StressOracle};
