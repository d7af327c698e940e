//! Riposte is a counter-argument validation engine based on abstract argumentation.
//!
//! Given an original argument and a set of counter-arguments with declared types,
//! the engine builds a Dung-style attack graph, natively computes its grounded
//! and complete extensions, and interprets them into validation verdicts and a
//! scalar strength score for the original argument.

#![warn(missing_docs)]

pub mod aa;

pub mod debate;

mod error;
pub use error::CoreError;

pub mod io;

pub mod semantics;
