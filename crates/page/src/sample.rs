//! Bundled demo catalog (the same collections the demo backend serves).

use storefront_catalog::StaticCatalogSource;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const PREDICTIONS_JSON: &str = include_str!("../data/predictions.json");

pub fn sample_source() -> StaticCatalogSource {
    StaticCatalogSource::new(PRODUCTS_JSON, PREDICTIONS_JSON)
}
