//! Learners that produce a stratified ordering directly.

pub mod basic;
pub mod edcd;
pub mod rcd;

pub use basic::BasicDemotion;
pub use edcd::ErrorDrivenDemotion;
pub use rcd::RecursiveDemotion;
