use gdp_comparison_dashboard::models::{Entity, Observation, ObservationField};
use gdp_comparison_dashboard::services::dashboard::build_dashboard;
use gdp_comparison_dashboard::services::dataset::{load_dataset, Dataset, Series, PPP_SCALE};
use gdp_comparison_dashboard::services::metrics::{
    annual_growth_rate, cross_ratio, cumulative_change, cumulative_inflation, rebase_volume_index,
};
use gdp_comparison_dashboard::MetricsError;

fn observation(year: i32, deflator: f64, constant: f64, ppp: f64) -> Observation {
    Observation {
        year,
        gdp_local_currency: constant * deflator / 100.0,
        gdp_deflator: deflator,
        gdp_constant_local_currency: constant,
        exchange_rate: 1.0,
        gdp_usd: constant,
        gdp_ppp: ppp,
    }
}

#[test]
fn volume_index_is_exactly_100_at_base_year() {
    let dataset = load_dataset().unwrap();
    for series in [dataset.entity_a(), dataset.entity_b()] {
        let index = rebase_volume_index(series).unwrap();
        assert_eq!(index[0].year, series.base().year);
        assert_eq!(index[0].value, 100.0);
    }
}

#[test]
fn growth_is_absent_at_base_year_and_defined_after() {
    let dataset = load_dataset().unwrap();
    for series in [dataset.entity_a(), dataset.entity_b()] {
        let growth = annual_growth_rate(&rebase_volume_index(series).unwrap()).unwrap();
        assert_eq!(growth.len(), series.len());
        assert!(growth[0].value.is_none());
        assert!(growth.iter().skip(1).all(|r| r.value.is_some()));
    }
}

#[test]
fn growth_serializes_base_year_as_null() {
    let dataset = load_dataset().unwrap();
    let growth = annual_growth_rate(&rebase_volume_index(dataset.entity_a()).unwrap()).unwrap();
    let json = serde_json::to_value(&growth).unwrap();
    assert!(json[0]["value"].is_null());
    assert!(json[1]["value"].is_f64());
}

#[test]
fn cumulative_change_is_repeatable() {
    let values = [3.15, 2.78, 2.67, 2.60, 2.56];
    let first = cumulative_change(&values).unwrap();
    let second = cumulative_change(&values).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn cross_ratio_pairs_by_year_not_position() {
    let a_rows = vec![
        observation(2019, 100.0, 3.0, 10.0),
        observation(2020, 104.0, 3.1, 12.0),
        observation(2021, 109.0, 3.2, 16.0),
    ];
    let b_rows = vec![
        observation(2019, 100.0, 400.0, 500.0),
        observation(2020, 101.0, 410.0, 600.0),
        observation(2021, 103.0, 420.0, 640.0),
    ];
    let mut b_reversed = b_rows.clone();
    b_reversed.reverse();

    let a = Series::new(Entity::Burundi, a_rows).unwrap();
    let b = Series::new(Entity::Belgium, b_rows).unwrap();
    let b_shuffled = Series::new(Entity::Belgium, b_reversed).unwrap();

    let ordered = cross_ratio(&a, &b, ObservationField::GdpPpp, PPP_SCALE).unwrap();
    let shuffled = cross_ratio(&a, &b_shuffled, ObservationField::GdpPpp, PPP_SCALE).unwrap();
    assert_eq!(ordered, shuffled);
    assert_eq!(ordered[1].value, 1000.0 * 600.0 / 12.0);
}

#[test]
fn burundi_contraction_scenario() {
    let dataset = load_dataset().unwrap();
    let burundi = dataset.entity_a();
    assert_eq!(burundi.base().gdp_constant_local_currency, 3.15);
    assert_eq!(burundi.last().gdp_constant_local_currency, 2.56);

    let index = rebase_volume_index(burundi).unwrap();
    let last = index.last().unwrap().value;
    assert!((last - 81.27).abs() < 0.005);

    let values: Vec<f64> = index.iter().map(|p| p.value).collect();
    let change = cumulative_change(&values).unwrap();
    assert!((change + 18.73).abs() < 0.005);
}

#[test]
fn belgium_inflation_scenario() {
    let dataset = load_dataset().unwrap();
    let belgium = dataset.entity_b();
    assert_eq!(belgium.base().gdp_deflator, 100.0);
    assert_eq!(belgium.last().gdp_deflator, 118.3);
    assert!((cumulative_inflation(belgium).unwrap() - 18.3).abs() < 1e-9);
}

#[test]
fn ppp_ratio_scenario() {
    let dataset = load_dataset().unwrap();
    let ratio = cross_ratio(dataset.entity_a(), dataset.entity_b(), ObservationField::GdpPpp, 1000.0).unwrap();
    let last = ratio.last().unwrap();
    assert_eq!(last.year, 2023);
    assert!((last.value - 61_994.0).abs() < 1.0);
}

#[test]
fn single_observation_is_insufficient() {
    let err = cumulative_change(&[100.0]).unwrap_err();
    assert_eq!(err, MetricsError::InsufficientData { required: 2, actual: 1 });
    assert_eq!(err.to_string(), "Insufficient data: need at least 2 observations, got 1");
}

#[test]
fn dashboard_headline_figures() {
    let dashboard = build_dashboard(&load_dataset().unwrap()).unwrap();
    assert!((dashboard.final_ppp_ratio - 61_994.0).abs() < 1.0);
    assert!((dashboard.entity_b.cumulative_growth - 5.04).abs() < 0.005);
    assert!((dashboard.entity_a.cumulative_inflation - 45.1).abs() < 1e-9);
}

#[test]
fn misaligned_dataset_is_rejected_on_load() {
    let a = Series::new(
        Entity::Burundi,
        vec![observation(2019, 100.0, 3.0, 10.0), observation(2020, 104.0, 3.1, 12.0)],
    )
    .unwrap();
    let b = Series::new(
        Entity::Belgium,
        vec![
            observation(2019, 100.0, 400.0, 500.0),
            observation(2020, 101.0, 410.0, 600.0),
            observation(2021, 103.0, 420.0, 640.0),
        ],
    )
    .unwrap();

    let err = Dataset::new(a, b, PPP_SCALE).unwrap_err();
    assert!(matches!(err, MetricsError::MisalignedYears { .. }));
    assert!(err.to_string().starts_with("Misaligned years"));
}
