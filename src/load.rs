use std::path::Path;

use anyhow::Context;

use crate::models::AppointmentRow;

/// Reads the appointment CSV into typed rows. Any missing file,
/// unknown header, or unparseable field is fatal.
pub fn load_appointments(path: &Path) -> anyhow::Result<Vec<AppointmentRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open appointment CSV at {}", path.display()))?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<AppointmentRow>().enumerate() {
        let row = result.with_context(|| format!("malformed record on data row {}", index + 1))?;
        rows.push(row);
    }

    Ok(rows)
}
