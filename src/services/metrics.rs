// src/services/metrics.rs
use std::collections::BTreeMap;
use crate::error::MetricsError;
use crate::models::{DerivedMetrics, ObservationField, YearRate, YearValue};
use crate::services::dataset::Series;

/// Real GDP rebased so the first year equals 100.
pub fn rebase_volume_index(series: &Series) -> Result<Vec<YearValue>, MetricsError> {
    let base = series.base();
    let base_value = base.gdp_constant_local_currency;
    if base_value == 0.0 {
        return Err(MetricsError::division_by_zero(format!("volume index, base year {}", base.year)));
    }

    let index = series
        .observations()
        .iter()
        .enumerate()
        .map(|(i, o)| YearValue {
            year: o.year,
            // exact 100 at the base, no x / x * 100 round trip
            value: if i == 0 { 100.0 } else { 100.0 * o.gdp_constant_local_currency / base_value },
        })
        .collect();
    Ok(index)
}

/// Year-over-year percent change. The first year has no prior value and is `None`.
pub fn annual_growth_rate(index: &[YearValue]) -> Result<Vec<YearRate>, MetricsError> {
    let mut rates = Vec::with_capacity(index.len());
    if let Some(first) = index.first() {
        rates.push(YearRate { year: first.year, value: None });
    }

    for pair in index.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if prev.value == 0.0 {
            return Err(MetricsError::division_by_zero(format!("annual growth for {}", curr.year)));
        }
        rates.push(YearRate {
            year: curr.year,
            value: Some(100.0 * (curr.value / prev.value - 1.0)),
        });
    }
    Ok(rates)
}

/// `scale * b[field] / a[field]` for every year, joined on year.
pub fn cross_ratio(
    a: &Series,
    b: &Series,
    field: ObservationField,
    scale: f64,
) -> Result<Vec<YearValue>, MetricsError> {
    let by_year_a: BTreeMap<i32, f64> = a.observations().iter().map(|o| (o.year, o.value(field))).collect();
    let by_year_b: BTreeMap<i32, f64> = b.observations().iter().map(|o| (o.year, o.value(field))).collect();

    if !by_year_a.keys().eq(by_year_b.keys()) {
        return Err(MetricsError::MisalignedYears {
            a: by_year_a.keys().copied().collect(),
            b: by_year_b.keys().copied().collect(),
        });
    }

    by_year_a
        .iter()
        .map(|(&year, &denominator)| {
            if denominator == 0.0 {
                return Err(MetricsError::division_by_zero(format!(
                    "{} ratio for {}",
                    field.column_name(),
                    year
                )));
            }
            Ok(YearValue { year, value: scale * by_year_b[&year] / denominator })
        })
        .collect()
}

/// Percent change from the first to the last value.
pub fn cumulative_change(values: &[f64]) -> Result<f64, MetricsError> {
    match values {
        [first, .., last] => {
            if *first == 0.0 {
                return Err(MetricsError::division_by_zero("cumulative change from a zero first value"));
            }
            Ok(100.0 * (last / first - 1.0))
        }
        _ => Err(MetricsError::InsufficientData { required: 2, actual: values.len() }),
    }
}

pub fn cumulative_growth(index: &[YearValue]) -> Result<f64, MetricsError> {
    let values: Vec<f64> = index.iter().map(|p| p.value).collect();
    cumulative_change(&values)
}

pub fn cumulative_inflation(series: &Series) -> Result<f64, MetricsError> {
    cumulative_change(&series.values(ObservationField::GdpDeflator))
}

pub fn derive_entity_metrics(series: &Series) -> Result<DerivedMetrics, MetricsError> {
    let volume_index = rebase_volume_index(series)?;
    let annual_growth = annual_growth_rate(&volume_index)?;
    let cumulative_growth = cumulative_growth(&volume_index)?;
    let cumulative_inflation = cumulative_inflation(series)?;

    Ok(DerivedMetrics {
        entity: series.entity(),
        volume_index,
        annual_growth,
        cumulative_growth,
        cumulative_inflation,
    })
}
