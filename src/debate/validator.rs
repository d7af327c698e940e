use super::{AttackGraphBuilder, CounterArgumentType};
use crate::aa::{AAFramework, Argument};
use crate::io::AspartixWriter;
use crate::semantics::{
    CompleteSemanticsSolver, ExtensionSetComputer, GroundedSemanticsSolver,
    SingleExtensionComputer, DEFAULT_MAX_ENUMERABLE,
};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use strum_macros::{AsRefStr, Display};

/// Tells how a [`ValidationResult`] was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationMode {
    /// The result was computed by the extension calculator.
    Formal,
    /// The result comes from the degraded heuristic mode; see [`crate::debate::fallback`].
    Heuristic,
}

/// The outcome of the validation of a single counter-argument.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    /// `true` iff the counter-argument is accepted by the grounded extension
    /// while the original argument is not.
    pub is_valid_attack: bool,
    /// `true` iff some complete extension accepts the original argument
    /// (credulous survival).
    pub original_survives: bool,
    /// `true` iff the counter-argument is accepted by the grounded extension
    /// or by some complete extension.
    pub counter_succeeds: bool,
    /// `true` iff the framework admits at least one complete extension.
    ///
    /// This always holds for finite frameworks (the complete set contains at
    /// least the grounded extension); the field is informational.
    pub logical_consistency: bool,
    /// A deterministic textual dump of the attack graph and its extensions,
    /// for display purposes only. Absent in heuristic mode.
    pub formal_representation: Option<String>,
    /// The labels of the grounded extension.
    pub grounded_extension: Vec<String>,
    /// The labels of each complete extension.
    pub complete_extensions: Vec<Vec<String>>,
    /// How this result was obtained.
    pub mode: ValidationMode,
}

/// Validates counter-arguments through abstract argumentation.
///
/// For each `(original, counter)` pair, the validator builds the attack graph
/// given by the counter-argument type, computes the grounded extension and
/// the set of complete extensions, and interprets memberships into the
/// [`ValidationResult`] verdicts.
///
/// Each call builds and consumes its own framework; a validator holds no
/// mutable state and may be shared freely across threads.
#[derive(Default)]
pub struct CounterArgumentValidator {
    builder: AttackGraphBuilder,
    max_enumerable: Option<usize>,
}

impl CounterArgumentValidator {
    /// Builds a new validator with the default enumeration cap
    /// ([`DEFAULT_MAX_ENUMERABLE`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new validator with the provided enumeration cap.
    ///
    /// Validation frameworks have two or three arguments, so the cap only
    /// matters for [`generate_attack_graph`](Self::generate_attack_graph)
    /// callers reusing the validator on large counter sets.
    pub fn new_with_max_enumerable(max_enumerable: usize) -> Self {
        Self {
            builder: AttackGraphBuilder::default(),
            max_enumerable: Some(max_enumerable),
        }
    }

    /// Validates a counter-argument against the original argument.
    ///
    /// # Arguments
    ///
    /// * `original` - the label of the original argument
    /// * `counter` - the label of the counter-argument
    /// * `counter_type` - the declared type of the counter-argument
    pub fn validate(
        &self,
        original: &str,
        counter: &str,
        counter_type: CounterArgumentType,
    ) -> Result<ValidationResult> {
        info!(
            r#"validating a "{}" counter-argument against "{}""#,
            counter_type, original
        );
        let af = self
            .builder
            .build(original, &[(counter.to_string(), counter_type)])?;
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
        let counter_arg = af.argument_set().get_argument(&counter.to_string())?;
        let in_grounded = |arg: &Argument<String>| grounded.contains(&arg);
        let in_some_complete =
            |arg: &Argument<String>| complete.iter().any(|ext| ext.contains(&arg));
        let result = ValidationResult {
            is_valid_attack: in_grounded(counter_arg) && !in_grounded(original_arg),
            original_survives: in_some_complete(original_arg),
            counter_succeeds: in_grounded(counter_arg) || in_some_complete(counter_arg),
            logical_consistency: !complete.is_empty(),
            formal_representation: Some(format_formal_representation(
                &af, &grounded, &complete,
            )?),
            grounded_extension: extension_labels(&grounded),
            complete_extensions: complete.iter().map(|e| extension_labels(e)).collect(),
            mode: ValidationMode::Formal,
        };
        info!(
            "validation done: is_valid_attack={}, original_survives={}, counter_succeeds={}",
            result.is_valid_attack, result.original_survives, result.counter_succeeds
        );
        Ok(result)
    }

    /// Generates a deterministic textual representation of the attack graph
    /// induced by a set of counter-arguments.
    ///
    /// # Arguments
    ///
    /// * `original` - the label of the original argument
    /// * `counters` - the labels and types of the counter-arguments
    pub fn generate_attack_graph(
        &self,
        original: &str,
        counters: &[(String, CounterArgumentType)],
    ) -> Result<String> {
        info!(
            "generating the attack graph of {} counter-argument(s)",
            counters.len()
        );
        let af = self.builder.build(original, counters)?;
        let mut buffer = Vec::new();
        AspartixWriter::default().write_framework(&af, &mut buffer)?;
        String::from_utf8(buffer).context("while decoding the generated attack graph")
    }
}

fn extension_labels(extension: &[&Argument<String>]) -> Vec<String> {
    extension.iter().map(|a| a.label().clone()).collect()
}

fn format_formal_representation(
    af: &AAFramework<String>,
    grounded: &[&Argument<String>],
    complete: &[Vec<&Argument<String>>],
) -> Result<String> {
    let context = "while building the formal representation";
    let writer = AspartixWriter::default();
    let mut buffer = Vec::new();
    writer.write_framework(af, &mut buffer).context(context)?;
    write!(&mut buffer, "grounded: ").context(context)?;
    writer
        .write_single_extension(&mut buffer, grounded)
        .context(context)?;
    for ext in complete {
        write!(&mut buffer, "complete: ").context(context)?;
        writer
            .write_single_extension(&mut buffer, ext)
            .context(context)?;
    }
    String::from_utf8(buffer).context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use strum::IntoEnumIterator;

    #[test]
    fn test_validate_direct_refutation() {
        let validator = CounterArgumentValidator::new();
        let result = validator
            .validate("o", "c", CounterArgumentType::DirectRefutation)
            .unwrap();
        assert!(result.is_valid_attack);
        assert!(!result.original_survives);
        assert!(result.counter_succeeds);
        assert!(result.logical_consistency);
        assert_eq!(ValidationMode::Formal, result.mode);
        assert_eq!(vec!["c".to_string()], result.grounded_extension);
        assert_eq!(vec![vec!["c".to_string()]], result.complete_extensions);
    }

    #[test]
    fn test_validate_every_direct_attack_type_defeats_the_original() {
        let validator = CounterArgumentValidator::new();
        for counter_type in CounterArgumentType::iter()
            .filter(|t| *t != CounterArgumentType::AlternativeExplanation)
        {
            let result = validator.validate("o", "c", counter_type).unwrap();
            assert!(result.is_valid_attack, "type {}", counter_type);
            assert!(!result.original_survives, "type {}", counter_type);
        }
    }

    #[test]
    fn test_validate_alternative_explanation_leaves_original_accepted() {
        let validator = CounterArgumentValidator::new();
        let result = validator
            .validate("o", "c", CounterArgumentType::AlternativeExplanation)
            .unwrap();
        // both the original and the counter attack the auxiliary conclusion,
        // so both stay accepted and the attack never succeeds as a defeat
        assert!(!result.is_valid_attack);
        assert!(result.original_survives);
        assert!(result.counter_succeeds);
        assert!(result.logical_consistency);
        let mut grounded = result.grounded_extension.clone();
        grounded.sort_unstable();
        assert_eq!(vec!["c".to_string(), "o".to_string()], grounded);
    }

    #[test]
    fn test_formal_representation_is_deterministic() {
        let validator = CounterArgumentValidator::new();
        let first = validator
            .validate("o", "c", CounterArgumentType::PremiseChallenge)
            .unwrap();
        let second = validator
            .validate("o", "c", CounterArgumentType::PremiseChallenge)
            .unwrap();
        let repr = first.formal_representation.unwrap();
        assert_eq!(repr, second.formal_representation.unwrap());
        assert!(repr.contains("att(c,o)."));
        assert!(repr.contains("grounded: [c]"));
    }

    #[test]
    fn test_validate_rejects_duplicate_labels() {
        let validator = CounterArgumentValidator::new();
        let err = validator
            .validate("o", "o", CounterArgumentType::DirectRefutation)
            .unwrap_err();
        assert_eq!(
            Some(&CoreError::DuplicateArgument("o".to_string())),
            err.downcast_ref::<CoreError>()
        );
    }

    #[test]
    fn test_generate_attack_graph() {
        let validator = CounterArgumentValidator::new();
        let graph = validator
            .generate_attack_graph(
                "o",
                &[
                    ("c0".to_string(), CounterArgumentType::DirectRefutation),
                    ("c1".to_string(), CounterArgumentType::AlternativeExplanation),
                ],
            )
            .unwrap();
        assert_eq!(
            "arg(o).\narg(c0).\narg(c1).\narg(conclusion).\natt(c0,o).\natt(o,conclusion).\natt(c1,conclusion).\n",
            graph
        );
    }

    #[test]
    fn test_generate_attack_graph_without_counters() {
        let validator = CounterArgumentValidator::new();
        assert_eq!(
            "arg(o).\n",
            validator.generate_attack_graph("o", &[]).unwrap()
        );
    }
}
