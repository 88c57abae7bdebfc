use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::entities::indicators::IndicatorField;
use crate::error::DashboardError;
use crate::usecase::services::comparison::ComparisonTable;

/// Writes the comparison as CSV: tab column first, amounts in `R$` form,
/// margins as plain numbers.
pub fn write_comparison_csv<W: Write>(
    table: &ComparisonTable,
    out: W,
) -> Result<(), DashboardError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(ComparisonTable::headers())?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(IndicatorField::ALL.len() + 1);
        record.push(row.tab.clone());
        record.extend(row.formatted_cells());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn comparison_csv_bytes(table: &ComparisonTable) -> Result<Vec<u8>, DashboardError> {
    let mut buffer = Vec::new();
    write_comparison_csv(table, &mut buffer)?;
    Ok(buffer)
}

pub fn save_comparison_csv(table: &ComparisonTable, path: &Path) -> Result<(), DashboardError> {
    let bytes = comparison_csv_bytes(table)?;
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), rows = table.len(), "comparison exported");
    Ok(())
}
