use super::cli_manager::logging_level_cli_arg;
use super::{common, Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::warn;
use riposte::debate::{fallback, StrengthAssessor};
use riposte::CoreError;

const CMD_NAME: &str = "assess";

pub(crate) struct AssessCommand;

impl AssessCommand {
    pub(crate) fn new() -> Self {
        AssessCommand
    }
}

impl<'a> Command<'a> for AssessCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Scores the strength of an argument under the counter-arguments of a scenario")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::max_enumerable_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let scenario = common::read_scenario_file(file)?;
        let assessor = match common::max_enumerable_value(arg_matches)? {
            Some(max) => StrengthAssessor::new_with_max_enumerable(max),
            None => StrengthAssessor::new(),
        };
        let score = match assessor.assess(&scenario.original, &scenario.counter_pairs()) {
            Ok(score) => score,
            Err(e)
                if matches!(
                    e.downcast_ref::<CoreError>(),
                    Some(CoreError::FrameworkTooLarge { .. })
                ) =>
            {
                warn!("{}; degrading to the heuristic strength assessment", e);
                fallback::heuristic_strength(&scenario.counter_strengths())
            }
            Err(e) => return Err(e),
        };
        println!("{:.4}", score);
        Ok(())
    }
}
