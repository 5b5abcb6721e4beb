//! Systems - randomness, seeding and the per-cell rules
//!
//! Each particle category has its own rule; `RuleSet` dispatches on type.

pub mod random;
pub mod rules;
pub mod seeder;
