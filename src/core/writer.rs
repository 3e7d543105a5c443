use crate::domain::model::FacilityRecord;
use crate::utils::error::Result;

pub const CSV_HEADER: [&str; 3] = ["Name", "Location", "Hours"];

/// Renders facilities as CSV. The header row is always written, so an empty
/// slice yields a header-only document.
pub fn to_csv_bytes(records: &[FacilityRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.name.as_deref().unwrap_or(""),
            record.location.as_deref().unwrap_or(""),
            record.joined_hours().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}
