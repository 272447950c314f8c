//! Learners with numeric state: ranking values (GLA) or weights (HG, MaxEnt).
//! The reported partial order is derived from that state.

pub mod gla;
pub mod hg;
pub mod maxent;

pub use gla::GradualLearner;
pub use hg::HarmonicLearner;
pub use maxent::MaxEntLearner;
