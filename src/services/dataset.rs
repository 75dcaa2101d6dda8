// src/services/dataset.rs
use log::debug;
use serde::Serialize;
use crate::error::MetricsError;
use crate::models::{Entity, Observation, ObservationField};

/// Unit correction applied to entity B's PPP figures before dividing by entity A's.
/// Tied to the units of the bundled figures, not a general conversion.
pub const PPP_SCALE: f64 = 1000.0;

pub const BASE_DEFLATOR: f64 = 100.0;

// year, GDP (local currency), deflator, constant-price GDP, exchange rate, GDP USD, GDP PPP
type Row = (i32, f64, f64, f64, f64, f64, f64);

const BURUNDI_ROWS: [Row; 5] = [
    (2019, 3.15, 100.0, 3.15, 1845.0, 1707.0, 10.15),
    (2020, 3.02, 108.5, 2.78, 1943.0, 1554.0, 9.85),
    (2021, 3.18, 119.2, 2.67, 1987.0, 1601.0, 9.92),
    (2022, 3.45, 132.8, 2.60, 2062.0, 1673.0, 10.25),
    (2023, 3.72, 145.1, 2.56, 2185.0, 1703.0, 10.58),
];

const BELGIUM_ROWS: [Row; 5] = [
    (2019, 477.8, 100.0, 477.8, 0.893, 535.2, 615.8),
    (2020, 469.5, 101.2, 463.9, 0.877, 535.4, 594.1),
    (2021, 527.1, 104.8, 502.9, 0.845, 623.8, 649.9),
    (2022, 577.2, 112.5, 513.1, 0.949, 608.2, 632.4),
    (2023, 593.8, 118.3, 501.9, 0.924, 642.5, 655.9),
];

fn to_observations(rows: &[Row]) -> Vec<Observation> {
    rows.iter()
        .map(|&(year, nominal, deflator, constant, fx, usd, ppp)| Observation {
            year,
            gdp_local_currency: nominal,
            gdp_deflator: deflator,
            gdp_constant_local_currency: constant,
            exchange_rate: fx,
            gdp_usd: usd,
            gdp_ppp: ppp,
        })
        .collect()
}

/// Annual observations for one entity, held in ascending year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    entity: Entity,
    observations: Vec<Observation>,
}

impl Series {
    /// Sorts the observations by year, then checks the series is non-empty,
    /// contiguous, and starts from a base deflator of 100.
    pub fn new(entity: Entity, mut observations: Vec<Observation>) -> Result<Self, MetricsError> {
        if observations.is_empty() {
            return Err(MetricsError::invalid_series(entity.label(), "no observations"));
        }
        observations.sort_by_key(|o| o.year);

        for pair in observations.windows(2) {
            if pair[0].year.checked_add(1) != Some(pair[1].year) {
                return Err(MetricsError::invalid_series(
                    entity.label(),
                    format!("years {} and {} are not consecutive", pair[0].year, pair[1].year),
                ));
            }
        }

        let base = observations[0];
        if base.gdp_deflator != BASE_DEFLATOR {
            return Err(MetricsError::invalid_series(
                entity.label(),
                format!("base year {} deflator is {}, expected 100", base.year, base.gdp_deflator),
            ));
        }

        Ok(Series { entity, observations })
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.year).collect()
    }

    pub fn base(&self) -> &Observation {
        &self.observations[0]
    }

    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    pub fn values(&self, field: ObservationField) -> Vec<f64> {
        self.observations.iter().map(|o| o.value(field)).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// The two series under comparison, aligned year for year.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    entity_a: Series,
    entity_b: Series,
    ppp_scale: f64,
}

impl Dataset {
    pub fn new(entity_a: Series, entity_b: Series, ppp_scale: f64) -> Result<Self, MetricsError> {
        if entity_a.entity() == entity_b.entity() {
            return Err(MetricsError::invalid_series(
                entity_a.entity().label(),
                "both sides of the comparison are the same entity",
            ));
        }

        if !ppp_scale.is_finite() || ppp_scale <= 0.0 {
            return Err(MetricsError::invalid_series(
                entity_b.entity().label(),
                format!("PPP scale must be finite and positive, got {}", ppp_scale),
            ));
        }

        let (years_a, years_b) = (entity_a.years(), entity_b.years());
        if years_a != years_b {
            return Err(MetricsError::MisalignedYears { a: years_a, b: years_b });
        }

        Ok(Dataset { entity_a, entity_b, ppp_scale })
    }

    pub fn entity_a(&self) -> &Series {
        &self.entity_a
    }

    pub fn entity_b(&self) -> &Series {
        &self.entity_b
    }

    pub fn ppp_scale(&self) -> f64 {
        self.ppp_scale
    }

    pub fn series(&self, entity: Entity) -> Option<&Series> {
        [&self.entity_a, &self.entity_b]
            .into_iter()
            .find(|s| s.entity() == entity)
    }
}

/// Builds the bundled Burundi (A) vs Belgium (B) dataset, 2019–2023.
pub fn load_dataset() -> Result<Dataset, MetricsError> {
    let burundi = Series::new(Entity::Burundi, to_observations(&BURUNDI_ROWS))?;
    let belgium = Series::new(Entity::Belgium, to_observations(&BELGIUM_ROWS))?;
    let dataset = Dataset::new(burundi, belgium, PPP_SCALE)?;
    debug!(
        "Loaded dataset: {} vs {}, years {:?}",
        dataset.entity_a().entity(),
        dataset.entity_b().entity(),
        dataset.entity_a().years()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, deflator: f64) -> Observation {
        Observation {
            year,
            gdp_local_currency: 1.0,
            gdp_deflator: deflator,
            gdp_constant_local_currency: 1.0,
            exchange_rate: 1.0,
            gdp_usd: 1.0,
            gdp_ppp: 1.0,
        }
    }

    #[test]
    fn loads_two_aligned_series() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.entity_a().entity(), Entity::Burundi);
        assert_eq!(dataset.entity_b().entity(), Entity::Belgium);
        assert_eq!(dataset.entity_a().years(), vec![2019, 2020, 2021, 2022, 2023]);
        assert_eq!(dataset.entity_a().years(), dataset.entity_b().years());
        assert_eq!(dataset.ppp_scale(), PPP_SCALE);
    }

    #[test]
    fn base_year_deflator_is_100() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.entity_a().base().gdp_deflator, 100.0);
        assert_eq!(dataset.entity_b().base().gdp_deflator, 100.0);
    }

    #[test]
    fn series_sorts_observations_by_year() {
        let series = Series::new(Entity::Burundi, vec![obs(2021, 110.0), obs(2019, 100.0), obs(2020, 105.0)]).unwrap();
        assert_eq!(series.years(), vec![2019, 2020, 2021]);
        assert_eq!(series.last().year, 2021);
    }

    #[test]
    fn rejects_empty_series() {
        let err = Series::new(Entity::Belgium, Vec::new()).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidSeries { .. }));
    }

    #[test]
    fn rejects_year_gap() {
        let err = Series::new(Entity::Belgium, vec![obs(2019, 100.0), obs(2021, 104.0)]).unwrap_err();
        assert!(err.to_string().contains("not consecutive"));
    }

    #[test]
    fn rejects_duplicate_max_year_without_overflow() {
        let err = Series::new(Entity::Burundi, vec![obs(i32::MAX, 100.0), obs(i32::MAX, 100.0)]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidSeries { .. }));
        assert!(err.to_string().contains("not consecutive"));
    }

    #[test]
    fn rejects_non_100_base_deflator() {
        let err = Series::new(Entity::Belgium, vec![obs(2019, 98.0), obs(2020, 100.0)]).unwrap_err();
        assert!(err.to_string().contains("expected 100"));
    }

    #[test]
    fn rejects_misaligned_years() {
        let a = Series::new(Entity::Burundi, vec![obs(2019, 100.0), obs(2020, 101.0)]).unwrap();
        let b = Series::new(Entity::Belgium, vec![obs(2020, 100.0), obs(2021, 101.0)]).unwrap();
        let err = Dataset::new(a, b, PPP_SCALE).unwrap_err();
        assert_eq!(
            err,
            MetricsError::MisalignedYears { a: vec![2019, 2020], b: vec![2020, 2021] }
        );
    }

    #[test]
    fn rejects_same_entity_twice() {
        let a = Series::new(Entity::Burundi, vec![obs(2019, 100.0)]).unwrap();
        let err = Dataset::new(a.clone(), a, PPP_SCALE).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidSeries { .. }));
    }

    #[test]
    fn rejects_unusable_ppp_scale() {
        for scale in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            let a = Series::new(Entity::Burundi, vec![obs(2019, 100.0)]).unwrap();
            let b = Series::new(Entity::Belgium, vec![obs(2019, 100.0)]).unwrap();
            let err = Dataset::new(a, b, scale).unwrap_err();
            assert!(matches!(err, MetricsError::InvalidSeries { .. }), "scale {} accepted", scale);
            assert!(err.to_string().contains("PPP scale"));
        }
    }

    #[test]
    fn looks_up_series_by_entity() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.series(Entity::Belgium).unwrap().base().gdp_ppp, 615.8);
    }
}
