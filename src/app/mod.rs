mod assess_command;
pub(crate) use assess_command::AssessCommand;

mod cli_manager;
pub(crate) use cli_manager::AppHelper;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod graph_command;
pub(crate) use graph_command::GraphCommand;

mod validate_command;
pub(crate) use validate_command::ValidateCommand;

mod writable_string;
