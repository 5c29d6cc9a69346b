//! Read a JSON employee from stdin and write its CBOR encoding to stdout.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    match employee_rest::cli::pack(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("employee-pack: {err}");
            ExitCode::FAILURE
        }
    }
}
