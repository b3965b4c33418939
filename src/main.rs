use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vendomat::application::machine::VendingMachine;
use vendomat::interfaces::csv::operation::Outcome;
use vendomat::interfaces::csv::operation_reader::OperationReader;
use vendomat::interfaces::csv::report_writer::ReportWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operation script CSV file
    input: PathBuf,

    /// Manufacturer label stamped on the machine
    #[arg(long, default_value = "Saeco")]
    manufacturer: String,

    /// Number of storage slots
    #[arg(long, default_value_t = 10)]
    slots: usize,

    /// Capacity of each slot in units
    #[arg(long, default_value_t = 5)]
    capacity: u32,

    /// Emit the final inventory as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut machine = VendingMachine::new(cli.manufacturer, cli.slots, cli.capacity);

    // Apply the script row by row. A bad row is reported and skipped; the
    // machine keeps whatever state the preceding rows produced.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);
    for row in reader.operations() {
        match row {
            Ok(op) => match op.apply(&mut machine) {
                Ok(Outcome::Dispensed(product)) => println!("dispensed {product}"),
                Ok(Outcome::Refunded(amount)) => println!("returned {amount}"),
                Ok(outcome) => debug!(?outcome, "operation applied"),
                Err(e) => eprintln!("Error applying operation: {e}"),
            },
            Err(e) => eprintln!("Error reading operation: {e}"),
        }
    }

    // Final inventory report on stdout.
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    if cli.json {
        writer.write_json(&machine).into_diagnostic()?;
    } else {
        writer.write_csv(&machine).into_diagnostic()?;
    }

    Ok(())
}
