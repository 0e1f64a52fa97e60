use crate::domain::fee_constant::FeeConstant;
use crate::error::Result;
use crate::interfaces::TableRow;
use std::io::Write;
use tracing::debug;

/// Writes fee constants to a CSV sink.
///
/// Wraps `csv::Writer`. The header row is always written, even when there are
/// no constants to export, so an empty selection still yields a valid table.
pub struct TableWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

/// Column names, in the field order of [`TableRow`].
pub const HEADER: [&str; 6] = ["name", "value", "kind", "role", "unit", "description"];

impl<W: Write> TableWriter<W> {
    /// Creates a new `TableWriter` over any `Write` sink (e.g., File, Stdout).
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self {
            writer,
            header_written: false,
        }
    }

    /// Writes every constant as one record and flushes the sink.
    pub fn write_constants<'a, I>(&mut self, constants: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a FeeConstant>,
    {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }

        let mut rows = 0usize;
        for constant in constants {
            self.writer.serialize(TableRow::from(constant))?;
            rows += 1;
        }
        self.writer.flush()?;
        debug!(rows, "wrote fee table as csv");
        Ok(())
    }
}
