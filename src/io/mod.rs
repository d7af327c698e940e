//! Objects used to read debate scenarios and write attack graphs.

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod scenario_reader;
pub use scenario_reader::DebateScenario;
pub use scenario_reader::ScenarioCounter;
pub use scenario_reader::ScenarioReader;
pub use scenario_reader::WarningHandler;
