use clap::Parser;

use inbetween_net::cli::Cli;
use inbetween_net::error::Result;
use inbetween_net::observability::init_logging;
use inbetween_net::pipeline::{self, RunReport};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(report) => {
            if cli.summary {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => tracing::error!("Failed to serialize run summary: {e}"),
                }
            }
            tracing::info!("All done!");
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn execute(cli: &Cli) -> Result<RunReport> {
    let config = cli.run_config()?;
    pipeline::run(&config)
}
