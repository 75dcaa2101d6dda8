// src/services/dashboard.rs
use log::debug;
use crate::error::MetricsError;
use crate::models::{DashboardMetrics, DerivedMetrics, ObservationField, SummaryRow, SummaryTable};
use crate::services::dataset::Dataset;
use crate::services::metrics::{cross_ratio, derive_entity_metrics};

pub const GDP_PPP: &str = "GDP PPP";
pub const GDP_USD: &str = "Nominal GDP";
pub const VOLUME_INDEX: &str = "Volume index";
pub const DEFLATOR: &str = "GDP deflator";
pub const CUMULATIVE_GROWTH: &str = "Cumulative real growth";
pub const CUMULATIVE_INFLATION: &str = "Cumulative inflation";

fn last_index_value(metrics: &DerivedMetrics) -> Result<f64, MetricsError> {
    metrics
        .volume_index
        .last()
        .map(|p| p.value)
        .ok_or(MetricsError::InsufficientData { required: 1, actual: 0 })
}

fn summary_table(
    dataset: &Dataset,
    a: &DerivedMetrics,
    b: &DerivedMetrics,
) -> Result<SummaryTable, MetricsError> {
    let (last_a, last_b) = (dataset.entity_a().last(), dataset.entity_b().last());
    let base_year = dataset.entity_a().base().year;

    let index_unit = format!("{}=100", base_year);
    let row = |indicator, unit: &str, entity_a, entity_b| SummaryRow {
        indicator,
        unit: unit.to_string(),
        entity_a,
        entity_b,
    };

    // PPP and USD figures keep each source's own units
    let rows = vec![
        row(GDP_PPP, "int. $, as reported", last_a.gdp_ppp, last_b.gdp_ppp),
        row(GDP_USD, "USD, as reported", last_a.gdp_usd, last_b.gdp_usd),
        row(VOLUME_INDEX, &index_unit, last_index_value(a)?, last_index_value(b)?),
        row(DEFLATOR, &index_unit, last_a.gdp_deflator, last_b.gdp_deflator),
        row(CUMULATIVE_GROWTH, "%", a.cumulative_growth, b.cumulative_growth),
        row(CUMULATIVE_INFLATION, "%", a.cumulative_inflation, b.cumulative_inflation),
    ];

    Ok(SummaryTable {
        year: last_a.year,
        entity_a: dataset.entity_a().entity(),
        entity_b: dataset.entity_b().entity(),
        rows,
    })
}

/// Computes every derived figure the dashboard displays. Nothing is cached;
/// each call recomputes from the dataset.
pub fn build_dashboard(dataset: &Dataset) -> Result<DashboardMetrics, MetricsError> {
    let entity_a = derive_entity_metrics(dataset.entity_a())?;
    let entity_b = derive_entity_metrics(dataset.entity_b())?;

    let ppp_ratio = cross_ratio(
        dataset.entity_a(),
        dataset.entity_b(),
        ObservationField::GdpPpp,
        dataset.ppp_scale(),
    )?;
    let final_ppp_ratio = ppp_ratio
        .last()
        .map(|p| p.value)
        .ok_or(MetricsError::InsufficientData { required: 1, actual: 0 })?;

    let summary = summary_table(dataset, &entity_a, &entity_b)?;
    debug!(
        "Built dashboard metrics: final PPP ratio {:.1}, cumulative growth {:.2}% / {:.2}%",
        final_ppp_ratio, entity_a.cumulative_growth, entity_b.cumulative_growth
    );

    Ok(DashboardMetrics {
        base_year: dataset.entity_a().base().year,
        final_year: dataset.entity_a().last().year,
        entity_a,
        entity_b,
        ppp_ratio,
        final_ppp_ratio,
        summary,
    })
}
