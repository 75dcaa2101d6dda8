// src/bin/print_summary.rs
use anyhow::Result;
use log::info;
use gdp_comparison_dashboard::services::dashboard::build_dashboard;
use gdp_comparison_dashboard::services::dataset::load_dataset;

fn with_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

fn main() -> Result<()> {
    env_logger::init();

    let dataset = load_dataset()?;
    let dashboard = build_dashboard(&dataset)?;
    let (a, b) = (dashboard.entity_a.entity, dashboard.entity_b.entity);
    info!("Printing summary for {} vs {}", a, b);

    println!("{} vs {} ({}–{})", a, b, dashboard.base_year, dashboard.final_year);
    println!();
    println!(
        "PPP GDP ratio ({}/{}) in {}: {} times",
        b, a, dashboard.final_year, with_thousands(dashboard.final_ppp_ratio, 0)
    );
    println!("Cumulative real growth ({}): {:.1} %", a, dashboard.entity_a.cumulative_growth);
    println!("Cumulative real growth ({}): {:.1} %", b, dashboard.entity_b.cumulative_growth);
    println!("Cumulative inflation ({}):   {:.1} %", a, dashboard.entity_a.cumulative_inflation);
    println!("Cumulative inflation ({}):   {:.1} %", b, dashboard.entity_b.cumulative_inflation);
    println!();

    println!("{:<26} {:<22} {:>14} {:>14}", "Indicator", "Unit", a.label(), b.label());
    for row in &dashboard.summary.rows {
        println!(
            "{:<26} {:<22} {:>14} {:>14}",
            row.indicator,
            row.unit,
            with_thousands(row.entity_a, 2),
            with_thousands(row.entity_b, 2)
        );
    }
    Ok(())
}
