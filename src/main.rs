use std::process::ExitCode;

use clap::Parser;
use glotpush::cli::{Arguments, ExitStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Arguments::parse();

    match glotpush::cli::run_cli(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
