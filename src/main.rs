mod aggregate;
mod args;
mod errors;
mod flow_log;
mod lookup;
mod output;
mod protocol;
mod tests;

use args::Cli;
use clap::Parser;
use log::{error, info};
use lookup::LookupTable;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> errors::Result<()> {
    let table = LookupTable::load(&cli.lookup_file)?;
    info!(
        "Loaded {} lookup entries from {}",
        table.len(),
        cli.lookup_file.display()
    );

    let records = flow_log::parse_file(&cli.flow_log_file)?;
    info!(
        "Parsed {} flow records from {}",
        records.len(),
        cli.flow_log_file.display()
    );

    let tag_counts = aggregate::count_by_tag(&records, &table);
    let port_protocol_counts = aggregate::count_by_port_protocol(&records);

    output::write_report_file(&cli.output, &tag_counts, &port_protocol_counts)?;
    info!("Output written to file {}", cli.output.display());

    Ok(())
}
