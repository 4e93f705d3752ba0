use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "week8countries.txt";
pub const DEFAULT_OUTPUT: &str = "matches/data.txt";

#[derive(Parser, Debug)]
#[command(
    name = "country_report",
    about = "Derive a fixed set of report sections from a list of country names",
    version,
    long_about = None
)]
pub struct Args {
    /// File with one country name per line
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report destination; its directory is created if missing
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the summary line on success
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,
}
