use modcheck::{
    cli::{execute, Args, Command},
    error::ErrorSeverity,
};
use std::process;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create command from arguments
    let command = Command::from_args(args);

    // Run the command and get exit code
    let exit_code = run_command(command);

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Run the command, mapping errors to exit codes by severity
fn run_command(command: Command) -> i32 {
    match execute(command) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}
