use chores::libs::{
    config::{parse_args, ConfigArg},
    errors::UpdateError,
    todos::{self, UpdateOutcome},
    utils,
};
use clap::Parser;

fn print_status(result: Result<UpdateOutcome, UpdateError>, task: &str) {
    match result {
        Ok(outcome) => utils::print_success(&format!(
            "Task '{}' marked as {} ({} line(s) updated)",
            task, outcome.status, outcome.lines_updated
        )),
        Err(UpdateError::TaskNotFound(_)) => {
            utils::print_warning(&format!("Task '{}' not found", task))
        }
        Err(e) => utils::print_error(&format!("Error: {}", e)),
    }
}

// Every outcome is reported on stdout; the exit status is always 0.
fn main() {
    utils::init_logging();
    let config_arg = ConfigArg::parse();

    let args = match parse_args(config_arg.config) {
        Ok(args) => args,
        Err(e) => {
            utils::print_error(&format!("Error: {:#}", e));
            return;
        }
    };

    let result = todos::update(&args.file, &args.task, &args.status);
    print_status(result, &args.task);
}
