use super::{AttackGraphBuilder, CounterArgumentType};
use crate::semantics::{
    CompleteSemanticsSolver, ExtensionSetComputer, GroundedSemanticsSolver,
    SingleExtensionComputer, DEFAULT_MAX_ENUMERABLE,
};
use anyhow::Result;
use log::info;

/// Scores how much an argument's strength degrades under multiple counter-arguments.
///
/// The score is the rate of complete extensions accepting the original
/// argument, averaged with 1 when the grounded extension also accepts it.
/// An undefeated argument scores 1.0; an argument rejected by every
/// extension scores 0.0.
///
/// Like [`CounterArgumentValidator`](crate::debate::CounterArgumentValidator),
/// an assessor holds no mutable state; every call owns its framework.
#[derive(Default)]
pub struct StrengthAssessor {
    builder: AttackGraphBuilder,
    max_enumerable: Option<usize>,
}

impl StrengthAssessor {
    /// Builds a new assessor with the default enumeration cap
    /// ([`DEFAULT_MAX_ENUMERABLE`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new assessor with the provided enumeration cap.
    ///
    /// Assessing N counter-arguments enumerates the complete extensions of a
    /// framework with up to N + 2 arguments; a call on a counter set
    /// exceeding the cap returns an error caused by a
    /// [`CoreError::FrameworkTooLarge`](crate::CoreError::FrameworkTooLarge),
    /// on which the caller may degrade to
    /// [`fallback::heuristic_strength`](crate::debate::fallback::heuristic_strength).
    pub fn new_with_max_enumerable(max_enumerable: usize) -> Self {
        Self {
            builder: AttackGraphBuilder::default(),
            max_enumerable: Some(max_enumerable),
        }
    }

    /// Assesses the strength of an argument under a set of counter-arguments.
    ///
    /// The returned score lies in `[0, 1]`.
    /// An empty counter set yields 1.0.
    ///
    /// # Arguments
    ///
    /// * `original` - the label of the original argument
    /// * `counters` - the labels and types of the counter-arguments
    pub fn assess(
        &self,
        original: &str,
        counters: &[(String, CounterArgumentType)],
    ) -> Result<f64> {
        info!(
            r#"assessing the strength of "{}" under {} counter-argument(s)"#,
            original,
            counters.len()
        );
        if counters.is_empty() {
            return Ok(1.);
        }
        let af = self.builder.build(original, counters)?;
        let mut grounded_solver = GroundedSemanticsSolver::new(&af);
        let grounded = grounded_solver
            .compute_one_extension()
            .unwrap_or_default();
        let mut complete_solver = CompleteSemanticsSolver::new_with_max_enumerable(
            &af,
            self.max_enumerable.unwrap_or(DEFAULT_MAX_ENUMERABLE),
        );
        let complete = complete_solver.compute_extensions()?;
        let original_arg = af.argument_set().get_argument(&original.to_string())?;
        let mut acceptance_rate = if complete.is_empty() {
            0.
        } else {
            complete.iter().filter(|ext| ext.contains(&original_arg)).count() as f64
                / complete.len() as f64
        };
        if grounded.contains(&original_arg) {
            acceptance_rate = (acceptance_rate + 1.) / 2.;
        }
        let score = acceptance_rate.clamp(0., 1.);
        info!("strength assessment done: score={}", score);
        Ok(score)
    }
}
