// Year-by-Year Projector
use shared::models::{ProjectionPoint, ProjectionSeries};
use shared::utils::number_format::round_to;

/// Most whole years a series holds. Longer durations still get a headline
/// figure, but their series stops here and is marked truncated.
pub const MAX_PROJECTION_YEARS: u32 = 1_000;

/// Value at each whole year `1..=floor(years)`, rounded to 2 decimals.
///
/// `rate_decimal` is a fraction (0.12 for 12%). The series is empty when
/// fewer than one whole year is covered, and holds at most
/// [`MAX_PROJECTION_YEARS`] points.
pub fn project_series(initial: f64, rate_decimal: f64, years: f64) -> ProjectionSeries {
    if !years.is_finite() || years < 1.0 {
        return ProjectionSeries::default();
    }

    let whole_years = years.floor();
    let truncated = whole_years > MAX_PROJECTION_YEARS as f64;
    let last_year = if truncated { MAX_PROJECTION_YEARS } else { whole_years as u32 };

    let growth = 1.0 + rate_decimal;
    let points = (1..=last_year)
        .map(|year| ProjectionPoint {
            year,
            value: round_to(initial * growth.powf(year as f64), 2),
        })
        .collect();

    if truncated {
        tracing::debug!(years, kept = last_year, "Projection truncated");
        ProjectionSeries::truncated(points)
    } else {
        ProjectionSeries::new(points)
    }
}
