// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

/// One entity, one year of national accounts data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub gdp_local_currency: f64,
    pub gdp_deflator: f64,
    pub gdp_constant_local_currency: f64,
    pub exchange_rate: f64,
    pub gdp_usd: f64,
    pub gdp_ppp: f64,
}

impl Observation {
    pub fn value(&self, field: ObservationField) -> f64 {
        match field {
            ObservationField::GdpLocalCurrency => self.gdp_local_currency,
            ObservationField::GdpDeflator => self.gdp_deflator,
            ObservationField::GdpConstantLocalCurrency => self.gdp_constant_local_currency,
            ObservationField::ExchangeRate => self.exchange_rate,
            ObservationField::GdpUsd => self.gdp_usd,
            ObservationField::GdpPpp => self.gdp_ppp,
        }
    }
}

/// Numeric columns of an [`Observation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationField {
    GdpLocalCurrency,
    GdpDeflator,
    GdpConstantLocalCurrency,
    ExchangeRate,
    GdpUsd,
    GdpPpp,
}

impl ObservationField {
    pub const ALL: [ObservationField; 6] = [
        ObservationField::GdpLocalCurrency,
        ObservationField::GdpDeflator,
        ObservationField::GdpConstantLocalCurrency,
        ObservationField::ExchangeRate,
        ObservationField::GdpUsd,
        ObservationField::GdpPpp,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            ObservationField::GdpLocalCurrency => "gdp_local_currency",
            ObservationField::GdpDeflator => "gdp_deflator",
            ObservationField::GdpConstantLocalCurrency => "gdp_constant_local_currency",
            ObservationField::ExchangeRate => "exchange_rate",
            ObservationField::GdpUsd => "gdp_usd",
            ObservationField::GdpPpp => "gdp_ppp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Burundi,
    Belgium,
}

impl Entity {
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Burundi => "Burundi",
            Entity::Belgium => "Belgium",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Entity::Burundi => "burundi",
            Entity::Belgium => "belgium",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Entity> {
        match slug.to_ascii_lowercase().as_str() {
            "burundi" => Some(Entity::Burundi),
            "belgium" => Some(Entity::Belgium),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// A year/value pair where the value may be undefined (e.g. growth at the base year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRate {
    pub year: i32,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DerivedMetrics {
    pub entity: Entity,
    pub volume_index: Vec<YearValue>,
    pub annual_growth: Vec<YearRate>,
    pub cumulative_growth: f64,
    pub cumulative_inflation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub indicator: &'static str,
    pub unit: String,
    pub entity_a: f64,
    pub entity_b: f64,
}

/// Final-year side-by-side comparison.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    pub year: i32,
    pub entity_a: Entity,
    pub entity_b: Entity,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn row(&self, indicator: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.indicator == indicator)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub base_year: i32,
    pub final_year: i32,
    pub entity_a: DerivedMetrics,
    pub entity_b: DerivedMetrics,
    pub ppp_ratio: Vec<YearValue>,
    pub final_ppp_ratio: f64,
    pub summary: SummaryTable,
}
