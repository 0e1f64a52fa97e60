use crate::domain::fee_constant::FeeConstant;
use crate::error::Result;
use crate::interfaces::TableRow;
use std::io::Write;
use tracing::debug;

/// Writes the constants as a pretty-printed JSON array followed by a newline.
///
/// Decimal values are emitted as strings (`"0.30"`) so no precision or scale
/// is lost to floating point.
pub fn write_json<W: Write>(mut writer: W, constants: &[FeeConstant]) -> Result<()> {
    let rows: Vec<TableRow> = constants.iter().map(TableRow::from).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(rows = rows.len(), "wrote fee table as json");
    Ok(())
}
