use app::{AppHelper, AssessCommand, Command, GraphCommand, ValidateCommand};

mod app;

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        "Riposte, a counter-argument validation engine.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AssessCommand::new()),
        Box::new(GraphCommand::new()),
        Box::new(ValidateCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
