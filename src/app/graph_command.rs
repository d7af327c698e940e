use super::cli_manager::logging_level_cli_arg;
use super::{common, Command};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use riposte::debate::CounterArgumentValidator;

const CMD_NAME: &str = "graph";

pub(crate) struct GraphCommand;

impl GraphCommand {
    pub(crate) fn new() -> Self {
        GraphCommand
    }
}

impl<'a> Command<'a> for GraphCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Prints the attack graph of a scenario in the Aspartix format")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let scenario = common::read_scenario_file(file)?;
        let graph = CounterArgumentValidator::new()
            .generate_attack_graph(&scenario.original, &scenario.counter_pairs())?;
        print!("{}", graph);
        Ok(())
    }
}
