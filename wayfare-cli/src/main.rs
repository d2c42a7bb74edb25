//! Entry point for the `wayfare` binary.
#![forbid(unsafe_code)]

use wayfare_cli::CliError;

fn main() {
    if let Err(err) = wayfare_cli::run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) {
    eprintln!("wayfare: {err}");
}
