use crate::error::{Result, VendingError};
use crate::interfaces::csv::operation::Operation;
use std::io::Read;

/// Reads an operation script from a CSV source.
///
/// Wraps `csv::Reader` and yields `Result<Operation>` per row, trimming
/// whitespace and tolerating short records so a malformed row surfaces as
/// an error item without ending the stream.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a reader over any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes the script row by row.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}
