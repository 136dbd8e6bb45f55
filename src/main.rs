//! Colours command-line entry point.

use std::process;

use clap::Parser;
use colours::{
    cli::{Cli, formatting::format_error},
    tracing_config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = cli.log_level().as_str();
    let logging = if cli.is_interactive() {
        tracing_config::init_with_file(level)
    } else {
        tracing_config::init(level)
    };
    if let Err(e) = logging {
        eprintln!("{}", format_error(&format!("Failed to initialize logging: {e}")));
    }

    match cli.execute().await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
