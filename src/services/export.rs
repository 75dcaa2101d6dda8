// src/services/export.rs
use anyhow::{Context, Result};
use csv::Writer;
use log::info;
use crate::models::ObservationField;
use crate::services::dataset::Series;
use crate::services::metrics::{annual_growth_rate, rebase_volume_index};

/// Full data table for one entity as CSV: every observation column plus the
/// volume index and annual growth. The base year's growth cell is left empty.
pub fn series_table_csv(series: &Series) -> Result<String> {
    let index = rebase_volume_index(series)?;
    let growth = annual_growth_rate(&index)?;

    let mut wtr = Writer::from_writer(Vec::new());

    let mut header = vec!["year"];
    header.extend(ObservationField::ALL.iter().map(|f| f.column_name()));
    header.extend(["volume_index", "annual_growth"]);
    wtr.write_record(&header)?;

    for ((obs, idx), rate) in series.observations().iter().zip(&index).zip(&growth) {
        let mut record = vec![obs.year.to_string()];
        record.extend(ObservationField::ALL.iter().map(|&f| obs.value(f).to_string()));
        record.push(idx.value.to_string());
        record.push(rate.value.map(|v| v.to_string()).unwrap_or_default());
        wtr.write_record(&record)?;
    }

    let bytes = wtr.into_inner().context("Failed to flush CSV writer")?;
    info!("Exported {} rows of {} data as CSV", series.len(), series.entity());
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
