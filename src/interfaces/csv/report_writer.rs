use crate::application::machine::VendingMachine;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the inventory report. Empty slots keep their row so the
/// report always lists every slot position.
#[derive(Debug, Serialize, PartialEq)]
pub struct SlotRecord {
    pub slot: usize,
    pub product: String,
    pub price: String,
    pub count: u32,
}

impl SlotRecord {
    fn from_machine(machine: &VendingMachine) -> Vec<SlotRecord> {
        machine
            .slots()
            .enumerate()
            .map(|(slot, state)| SlotRecord {
                slot,
                product: state
                    .product()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                price: state
                    .product()
                    .map(|p| p.price.to_string())
                    .unwrap_or_default(),
                count: state.count(),
            })
            .collect()
    }
}

/// Writes the machine's final slot inventory to any `Write` sink.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// One CSV row per slot, header `slot,product,price,count`.
    pub fn write_csv(&mut self, machine: &VendingMachine) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        for record in SlotRecord::from_machine(machine) {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// The same records as a pretty-printed JSON array.
    pub fn write_json(&mut self, machine: &VendingMachine) -> Result<()> {
        let records = SlotRecord::from_machine(machine);
        serde_json::to_writer_pretty(&mut self.writer, &records)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::product::Product;

    fn stocked_machine() -> VendingMachine {
        let mut machine = VendingMachine::new("Saeco", 3, 5);
        machine
            .add_product(Product::new("Snickers", Money::from_cents(120)), 4, 1)
            .unwrap();
        machine
    }

    #[test]
    fn test_csv_report_lists_every_slot() {
        let mut buffer = Vec::new();
        ReportWriter::new(&mut buffer)
            .write_csv(&stocked_machine())
            .unwrap();

        let report = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "slot,product,price,count");
        assert_eq!(lines[1], "0,,,0");
        assert_eq!(lines[2], "1,Snickers,1.20,4");
        assert_eq!(lines[3], "2,,,0");
    }

    #[test]
    fn test_json_report() {
        let mut buffer = Vec::new();
        ReportWriter::new(&mut buffer)
            .write_json(&stocked_machine())
            .unwrap();

        let report = String::from_utf8(buffer).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&report).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["product"], "Snickers");
        assert_eq!(records[1]["price"], "1.20");
        assert_eq!(records[1]["count"], 4);
    }
}
