/// Binary operator application.
///
/// Applies a single operator to two `f64` operands and reports division by
/// zero.
pub mod binary;

/// Core reduction logic.
///
/// Contains the evaluation entry point, the result alias, and the
/// tier-by-tier collapse of the term sequence.
pub mod core;
