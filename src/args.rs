use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about = "Classify flow-log records against a lookup table and emit aggregate counts"
)]
pub struct Cli {
    /// Path to the lookup table CSV file (columns: dstport,protocol,tag)
    pub lookup_file: PathBuf,

    /// Path to the flow log file
    pub flow_log_file: PathBuf,

    /// Output CSV file
    #[clap(long, default_value = "output.csv")]
    pub output: PathBuf,
}
