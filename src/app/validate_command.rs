use super::cli_manager::logging_level_cli_arg;
use super::{common, Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};
use riposte::debate::{fallback, CounterArgumentValidator, ValidationResult};
use riposte::io::ScenarioCounter;
use riposte::CoreError;

const CMD_NAME: &str = "validate";

pub(crate) struct ValidateCommand;

impl ValidateCommand {
    pub(crate) fn new() -> Self {
        ValidateCommand
    }
}

impl<'a> Command<'a> for ValidateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Validates the counter-arguments of a scenario against its original argument")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::max_enumerable_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let scenario = common::read_scenario_file(file)?;
        let validator = match common::max_enumerable_value(arg_matches)? {
            Some(max) => CounterArgumentValidator::new_with_max_enumerable(max),
            None => CounterArgumentValidator::new(),
        };
        for counter in &scenario.counters {
            let result = validate_with_fallback(&validator, &scenario.original, counter)?;
            if let Some(repr) = &result.formal_representation {
                repr.lines().for_each(|l| info!("{}", l));
            }
            println!(
                "{}: mode={} is_valid_attack={} original_survives={} counter_succeeds={} logical_consistency={}",
                counter.label,
                result.mode,
                result.is_valid_attack,
                result.original_survives,
                result.counter_succeeds,
                result.logical_consistency,
            );
        }
        Ok(())
    }
}

fn validate_with_fallback(
    validator: &CounterArgumentValidator,
    original: &str,
    counter: &ScenarioCounter,
) -> Result<ValidationResult> {
    match validator.validate(original, &counter.label, counter.counter_type) {
        Ok(result) => Ok(result),
        Err(e)
            if matches!(
                e.downcast_ref::<CoreError>(),
                Some(CoreError::FrameworkTooLarge { .. })
            ) =>
        {
            warn!("{}; degrading to the heuristic validation mode", e);
            Ok(fallback::heuristic_validation(counter.strength))
        }
        Err(e) => Err(e),
    }
}
