use super::CounterArgumentType;
use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{Context, Result};

/// The label of the auxiliary conclusion argument introduced by
/// [`CounterArgumentType::AlternativeExplanation`] counter-arguments.
pub const CONCLUSION_LABEL: &str = "conclusion";

/// Translates counter-argument metadata into an attack graph.
///
/// The builder adds the original argument, every counter-argument and the
/// attacks given by a fixed per-type pattern:
///
/// | type | pattern |
/// |---|---|
/// | `direct_refutation` | counter → original |
/// | `premise_challenge` | counter → original |
/// | `counter_example` | counter → original |
/// | `reductio_ad_absurdum` | counter → original |
/// | `alternative_explanation` | original → `conclusion`, counter → `conclusion` |
///
/// The `alternative_explanation` pattern makes the original and the counter
/// attack a shared auxiliary [`CONCLUSION_LABEL`] argument instead of one
/// another. Note that this leaves both of them unattacked, so such a counter
/// alone never defeats the original; the pattern is kept as-is for
/// compatibility with the system this engine replaces.
///
/// Counters never attack each other: with N counters, each one contributes
/// its own edges following its own type.
#[derive(Default)]
pub struct AttackGraphBuilder {}

impl AttackGraphBuilder {
    /// Builds the attack graph for an original argument and its counter-arguments.
    ///
    /// Labels must be unique; reusing one (including reusing the original's
    /// label for a counter) yields an error caused by a
    /// [`CoreError::DuplicateArgument`](crate::CoreError::DuplicateArgument).
    ///
    /// # Arguments
    ///
    /// * `original` - the label of the original argument
    /// * `counters` - the labels and types of the counter-arguments
    pub fn build(
        &self,
        original: &str,
        counters: &[(String, CounterArgumentType)],
    ) -> Result<AAFramework<String>> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::default());
        af.new_argument(original.to_string())
            .context("while adding the original argument")?;
        for (counter, counter_type) in counters {
            af.new_argument(counter.clone())
                .with_context(|| format!(r#"while adding the counter-argument "{}""#, counter))?;
            self.add_attacks_for_type(&mut af, original, counter, *counter_type)?;
        }
        Ok(af)
    }

    fn add_attacks_for_type(
        &self,
        af: &mut AAFramework<String>,
        original: &str,
        counter: &str,
        counter_type: CounterArgumentType,
    ) -> Result<()> {
        match counter_type {
            CounterArgumentType::DirectRefutation
            | CounterArgumentType::PremiseChallenge
            | CounterArgumentType::CounterExample
            | CounterArgumentType::ReductioAdAbsurdum => {
                af.new_attack(&counter.to_string(), &original.to_string())
            }
            CounterArgumentType::AlternativeExplanation => {
                af.ensure_argument(CONCLUSION_LABEL.to_string());
                af.new_attack(&original.to_string(), &CONCLUSION_LABEL.to_string())?;
                af.new_attack(&counter.to_string(), &CONCLUSION_LABEL.to_string())
            }
        }
        .with_context(|| {
            format!(
                r#"while encoding the "{}" attack pattern of "{}""#,
                counter_type, counter
            )
        })
    }
}
