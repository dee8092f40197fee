//! CSV and JSON export of business lead scores.
//!
//! Writers take any `io::Write`, so the same code serves files and stdout.

use crate::models::Business;
use std::io::Write;

/// Column order of the CSV export.
pub const CSV_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "neighborhood",
    "category",
    "lead_score",
    "reviews_count",
    "avg_rating",
];

pub const DEFAULT_EXPORT_PATH: &str = "business_lead_scores.csv";

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Export businesses to CSV, one row per business. Absent values become empty cells.
///
/// Returns the number of rows written, excluding the header.
pub fn export_csv<W: Write>(businesses: &[Business], writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_COLUMNS)?;

    let mut count = 0;
    for business in businesses {
        csv_writer.write_record([
            business.id.to_string().as_str(),
            business.name.as_str(),
            business.neighborhood.as_deref().unwrap_or(""),
            business.category.as_deref().unwrap_or(""),
            format!("{:?}", business.lead_score).as_str(),
            business.reviews_count.to_string().as_str(),
            format!("{:?}", business.avg_rating).as_str(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export businesses as a pretty-printed JSON array.
pub fn export_json<W: Write>(businesses: &[Business], writer: W) -> Result<usize, serde_json::Error> {
    serde_json::to_writer_pretty(writer, businesses)?;
    Ok(businesses.len())
}

/// Writes `businesses` to `path` in the requested format.
pub fn export_to_path(
    businesses: &[Business],
    path: &std::path::Path,
    format: ExportFormat,
) -> anyhow::Result<usize> {
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    let mut writer = std::io::BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export_csv(businesses, &mut writer)?,
        ExportFormat::Json => export_json(businesses, &mut writer)?,
    };
    writer.flush()?;
    Ok(count)
}
