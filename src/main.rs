use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use country_report::{pipeline, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    info!(action = "start", component = "cli", input = ?args.input, output = ?args.output, "Starting country_report");

    match pipeline::generate_report_with_workers(&args.input, &args.output, args.workers) {
        Ok(summary) => {
            if !args.quiet {
                pipeline::print_summary(&summary);
            }
            Ok(())
        }
        Err(e) => {
            debug!(action = "fail", component = "cli", error = ?e, "Report generation failed");
            eprintln!("Error processing file: {}", e);
            std::process::exit(1);
        }
    }
}
