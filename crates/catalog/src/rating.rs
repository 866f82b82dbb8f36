//! Growth-based product ratings.
//!
//! Catalog products have no customer ratings; cards show a star count
//! derived from the growth percentage instead. How much growth one star is
//! worth is configuration (`growth_star_divisor`), not a constant.

pub const MAX_STARS: u8 = 5;

/// Star count for a product with the given growth percentage.
///
/// `min(round(growth / divisor), 5)`; missing, zero or non-finite growth
/// yields `default_stars`, negative growth yields 0.
pub fn growth_stars(growth_pct: Option<f64>, divisor: f64, default_stars: u8) -> u8 {
    let default_stars = default_stars.min(MAX_STARS);

    let growth = match growth_pct {
        Some(g) if g.is_finite() && g != 0.0 => g,
        _ => return default_stars,
    };
    if !(divisor.is_finite() && divisor > 0.0) {
        return default_stars;
    }
    if growth < 0.0 {
        return 0;
    }

    let stars = (growth / divisor).round();
    if stars >= f64::from(MAX_STARS) {
        MAX_STARS
    } else {
        stars as u8
    }
}
