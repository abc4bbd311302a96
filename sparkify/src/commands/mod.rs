// sparkify/src/commands/mod.rs

pub mod create_tables;
pub mod etl;

use sparkify_core::SparkifyError;

pub const SUCCESS: &str = "Process succeeded";
pub const FAILURE: &str = "Process failed";

/// Final status line shared by every command. A failed run still ends the
/// process normally; the text is the signal.
pub fn report(outcome: &Result<(), SparkifyError>) {
    println!("{}", status_text(outcome));
}

/// On failure the warehouse's own error text comes first. The group message
/// has already been logged by the runner.
fn status_text(outcome: &Result<(), SparkifyError>) -> String {
    match outcome {
        Ok(()) => SUCCESS.to_string(),
        Err(e) => format!("{}\n{}", e.root_cause(), FAILURE),
    }
}
