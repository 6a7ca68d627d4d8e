use std::process::ExitCode;

fn main() -> ExitCode {
    dinescore_cli::run()
}
