use std::process::ExitCode;

use keytree::walkthrough::Walkthrough;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let walkthrough = match Walkthrough::from_args(std::env::args().skip(1)) {
        Ok(walkthrough) => walkthrough,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for step in walkthrough.run() {
        println!("{step}");
    }

    ExitCode::SUCCESS
}
