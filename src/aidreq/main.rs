//! The `aidreq` binary. All terminal concerns live in `cli/`; this file only runs
//! it and turns a failure into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
