//! The counter-argument validation layer built on top of the extension calculator.
//!
//! This module translates domain-level counter-argument metadata into attack
//! graphs, and interprets the computed extensions into validation verdicts
//! ([`ValidationResult`]) and strength scores.

mod attack_graph;
pub use attack_graph::AttackGraphBuilder;
pub use attack_graph::CONCLUSION_LABEL;

mod counters;
pub use counters::ArgumentStrength;
pub use counters::CounterArgumentType;

pub mod fallback;

mod strength;
pub use strength::StrengthAssessor;

mod validator;
pub use validator::CounterArgumentValidator;
pub use validator::ValidationMode;
pub use validator::ValidationResult;
