//! Read one or more concatenated CBOR employee records from stdin and print
//! each as a JSON line.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    match employee_rest::cli::unpack(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("employee-unpack: {err}");
            ExitCode::FAILURE
        }
    }
}
