//! Entry point for the `trackroute` command-line interface.
#![forbid(unsafe_code)]

use trackroute_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    match trackroute_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("trackroute: {err}");
            std::process::exit(1);
        }
    }
}
