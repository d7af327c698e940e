use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use riposte::io::{DebateScenario, ScenarioReader};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the debate scenario")
        .required(true)
}

pub(crate) const ARG_MAX_ENUMERABLE: &str = "MAX_ENUMERABLE";

pub(crate) fn max_enumerable_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_MAX_ENUMERABLE)
        .long("max-enumerable")
        .empty_values(false)
        .multiple(false)
        .help("the maximal number of arguments allowed for complete-extension enumeration")
        .required(false)
}

pub(crate) fn max_enumerable_value(arg_matches: &ArgMatches<'_>) -> Result<Option<usize>> {
    arg_matches
        .value_of(ARG_MAX_ENUMERABLE)
        .map(|v| {
            v.parse::<usize>()
                .with_context(|| format!(r#"while parsing the enumeration cap "{}""#, v))
        })
        .transpose()
}

pub(crate) fn read_scenario_file(file_path: &str) -> Result<DebateScenario> {
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    let mut reader = ScenarioReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let scenario = reader.read(&mut file_reader)?;
    info!(
        r#"the scenario opposes {} counter-argument(s) to the argument "{}""#,
        scenario.counters.len(),
        scenario.original,
    );
    Ok(scenario)
}

/// Canonicalize a path given by the user.
fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
